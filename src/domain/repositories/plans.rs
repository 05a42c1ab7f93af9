use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{entities::plans::PlanEntity, value_objects::enums::plan_types::PlanType};

#[automock]
#[async_trait]
pub trait PlanRepository {
    async fn list_plans(&self) -> Result<Vec<PlanEntity>>;
    async fn find_by_type(&self, plan_type: PlanType) -> Result<Option<PlanEntity>>;
}
