use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    config::config_model::Checkout,
    domain::{
        entities::subscriptions::InsertSubscriptionEntity,
        repositories::{plans::PlanRepository, subscriptions::SubscriptionRepository},
        value_objects::{
            pix_key_request::{ValidationError, validate_pix_key_request},
            subscriptions::{PixKeyResponse, SubscriptionDto},
        },
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("invalid request data: {0}")]
    Validation(#[from] ValidationError),
    #[error("subscription not found")]
    SubscriptionNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubscriptionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubscriptionError::SubscriptionNotFound => StatusCode::NOT_FOUND,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionError>;

/// Turns a plan selection into a stored record carrying the configured PIX key and
/// WhatsApp number.
pub struct SubscriptionIntakeUseCase<P, S>
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    subscription_repo: Arc<S>,
    checkout: Checkout,
}

impl<P, S> SubscriptionIntakeUseCase<P, S>
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, subscription_repo: Arc<S>, checkout: Checkout) -> Self {
        Self {
            plan_repo,
            subscription_repo,
            checkout,
        }
    }

    pub async fn issue_pix_key(&self, body: &Value) -> UseCaseResult<PixKeyResponse> {
        let request = validate_pix_key_request(body).map_err(|err| {
            warn!(
                fields = %err,
                status = StatusCode::BAD_REQUEST.as_u16(),
                "subscriptions: pix key request rejected"
            );
            err
        })?;

        let plan_type = request.plan_type;
        let price = request.price;
        info!(%plan_type, price, "subscriptions: pix key requested");

        match self.plan_repo.find_by_type(plan_type).await {
            Ok(Some(plan)) if plan.price != price => {
                warn!(
                    %plan_type,
                    price,
                    catalog_price = plan.price,
                    "subscriptions: requested price differs from catalog price"
                );
            }
            Ok(_) => {}
            Err(err) => {
                warn!(
                    %plan_type,
                    error = ?err,
                    "subscriptions: could not load catalog plan for price comparison"
                );
            }
        }

        let subscription = self
            .subscription_repo
            .create(InsertSubscriptionEntity {
                plan_type,
                price,
                pix_key: self.checkout.pix_key.clone(),
                whatsapp_number: self.checkout.whatsapp_number.clone(),
            })
            .await
            .map_err(|err| {
                error!(
                    %plan_type,
                    price,
                    db_error = ?err,
                    "subscriptions: failed to store subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            subscription_id = %subscription.id,
            %plan_type,
            price,
            "subscriptions: pix key issued"
        );

        Ok(PixKeyResponse::from(subscription))
    }

    pub async fn find_subscription(&self, subscription_id: Uuid) -> UseCaseResult<SubscriptionDto> {
        let subscription = self
            .subscription_repo
            .find_by_id(subscription_id)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to load subscription"
                );
                SubscriptionError::Internal(err)
            })?
            .ok_or_else(|| {
                info!(%subscription_id, "subscriptions: subscription not found");
                SubscriptionError::SubscriptionNotFound
            })?;

        Ok(SubscriptionDto::from(subscription))
    }
}
