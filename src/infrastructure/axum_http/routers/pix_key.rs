use crate::{
    application::usecases::subscriptions::SubscriptionIntakeUseCase,
    domain::{
        repositories::{plans::PlanRepository, subscriptions::SubscriptionRepository},
        value_objects::pix_key_request::{BODY_FIELD, ValidationError},
    },
    infrastructure::axum_http::error_responses::AppError,
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

pub fn routes<P, S>(usecase: Arc<SubscriptionIntakeUseCase<P, S>>) -> Router
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/pix-key", post(issue_pix_key::<P, S>))
        .with_state(usecase)
}

/// The body is taken as raw JSON so every field constraint is checked and reported
/// by the intake use case rather than by the extractor.
pub async fn issue_pix_key<P, S>(
    State(usecase): State<Arc<SubscriptionIntakeUseCase<P, S>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    let Json(body) = payload.map_err(|rejection| {
        warn!(
            status = rejection.status().as_u16(),
            rejection = %rejection.body_text(),
            "pix_key: request body rejected"
        );
        ValidationError::single(BODY_FIELD, rejection.body_text())
    })?;

    let response = usecase.issue_pix_key(&body).await?;
    Ok(Json(response))
}
