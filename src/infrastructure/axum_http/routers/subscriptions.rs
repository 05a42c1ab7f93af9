use crate::{
    application::usecases::subscriptions::SubscriptionIntakeUseCase,
    domain::repositories::{plans::PlanRepository, subscriptions::SubscriptionRepository},
    infrastructure::axum_http::error_responses::AppError,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routes<P, S>(usecase: Arc<SubscriptionIntakeUseCase<P, S>>) -> Router
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/subscriptions/:subscription_id", get(find_subscription::<P, S>))
        .with_state(usecase)
}

pub async fn find_subscription<P, S>(
    State(usecase): State<Arc<SubscriptionIntakeUseCase<P, S>>>,
    Path(subscription_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    let subscription_id = Uuid::parse_str(&subscription_id)
        .map_err(|_| AppError::BadRequest("Invalid subscription id format".to_string()))?;

    let subscription = usecase.find_subscription(subscription_id).await?;
    Ok(Json(subscription))
}
