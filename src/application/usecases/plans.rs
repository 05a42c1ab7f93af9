use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use crate::domain::{repositories::plans::PlanRepository, value_objects::plans::PlanDto};

pub struct PlanCatalogUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
}

impl<P> PlanCatalogUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>) -> Self {
        Self { plan_repo }
    }

    pub async fn list_plans(&self) -> Result<Vec<PlanDto>> {
        let plans = self.plan_repo.list_plans().await.map_err(|err| {
            error!(error = ?err, "plans: failed to list plans");
            err
        })?;

        info!(plan_count = plans.len(), "plans: catalog loaded");
        Ok(plans.into_iter().map(PlanDto::from).collect())
    }
}
