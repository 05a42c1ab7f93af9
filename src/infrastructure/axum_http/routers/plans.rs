use crate::{
    application::usecases::plans::PlanCatalogUseCase,
    domain::repositories::plans::PlanRepository,
    infrastructure::axum_http::error_responses::AppError,
};
use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use std::sync::Arc;

pub fn routes<P>(plan_repo: Arc<P>) -> Router
where
    P: PlanRepository + Send + Sync + 'static,
{
    let usecase = PlanCatalogUseCase::new(plan_repo);

    Router::new()
        .route("/plans", get(list_plans::<P>))
        .with_state(Arc::new(usecase))
}

pub async fn list_plans<P>(
    State(usecase): State<Arc<PlanCatalogUseCase<P>>>,
) -> Result<impl IntoResponse, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
{
    let plans = usecase.list_plans().await?;
    Ok(Json(plans))
}
