use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity};

/// Append-only store of issued subscription records.
#[automock]
#[async_trait]
pub trait SubscriptionRepository {
    async fn create(&self, insert_entity: InsertSubscriptionEntity) -> Result<SubscriptionEntity>;
    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>>;
    async fn count(&self) -> Result<usize>;
}
