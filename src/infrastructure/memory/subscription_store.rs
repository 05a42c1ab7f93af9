use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
    repositories::subscriptions::SubscriptionRepository,
};

/// Process-lifetime record map. Owned by `main` and shared with the routers through `Arc`.
/// Records are only ever inserted.
pub struct InMemorySubscriptionStore {
    subscriptions: RwLock<HashMap<Uuid, SubscriptionEntity>>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySubscriptionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionStore {
    async fn create(&self, insert_entity: InsertSubscriptionEntity) -> Result<SubscriptionEntity> {
        let mut subscriptions = self.subscriptions.write().await;

        let mut id = Uuid::new_v4();
        while subscriptions.contains_key(&id) {
            warn!(%id, "subscription_store: id collision, drawing a new one");
            id = Uuid::new_v4();
        }

        let subscription = SubscriptionEntity {
            id,
            plan_type: insert_entity.plan_type,
            price: insert_entity.price,
            pix_key: insert_entity.pix_key,
            whatsapp_number: insert_entity.whatsapp_number,
            created_at: Utc::now(),
        };
        subscriptions.insert(id, subscription.clone());

        debug!(
            %id,
            total = subscriptions.len(),
            "subscription_store: record inserted"
        );
        Ok(subscription)
    }

    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.get(&subscription_id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.subscriptions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::plan_types::PlanType;

    fn insert_entity() -> InsertSubscriptionEntity {
        InsertSubscriptionEntity {
            plan_type: PlanType::Monthly,
            price: 8,
            pix_key: "pix-key".to_string(),
            whatsapp_number: "5511920752428".to_string(),
        }
    }

    #[tokio::test]
    async fn create_stores_record_with_fresh_id() {
        let store = InMemorySubscriptionStore::new();

        let created = store.create(insert_entity()).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.pix_key, "pix-key");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn identical_inserts_create_distinct_records() {
        let store = InMemorySubscriptionStore::new();

        let first = store.create(insert_entity()).await.unwrap();
        let second = store.create(insert_entity()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let store = InMemorySubscriptionStore::new();
        assert_eq!(store.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}
