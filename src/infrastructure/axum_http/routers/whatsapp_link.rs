use crate::{
    application::usecases::whatsapp_handoff::WhatsAppHandoffUseCase,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::{
            enums::plan_types::PlanType,
            pix_key_request::{PLAN_TYPE_FIELD, ValidationError},
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};
use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct WhatsAppLinkQuery {
    #[serde(rename = "planType")]
    plan_type: Option<String>,
}

pub fn routes<P>(usecase: Arc<WhatsAppHandoffUseCase<P>>) -> Router
where
    P: PlanRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/whatsapp-link", get(whatsapp_link::<P>))
        .with_state(usecase)
}

pub async fn whatsapp_link<P>(
    State(usecase): State<Arc<WhatsAppHandoffUseCase<P>>>,
    Query(query): Query<WhatsAppLinkQuery>,
) -> Result<impl IntoResponse, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let plan_type = match query.plan_type.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(PlanType::from_str(raw).ok_or_else(|| {
            ValidationError::single(PLAN_TYPE_FIELD, format!("unknown plan type '{raw}'"))
        })?),
    };

    let link = usecase.link_for(plan_type).await?;
    Ok(Json(link))
}
