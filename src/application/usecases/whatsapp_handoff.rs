use std::sync::Arc;

use anyhow::{Result, anyhow};
use tracing::{debug, error};

use crate::{
    config::config_model::Checkout,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::{enums::plan_types::PlanType, subscriptions::WhatsAppLinkDto, whatsapp},
    },
};

/// Builds the wa.me deep links a visitor follows to send proof of payment.
pub struct WhatsAppHandoffUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    checkout: Checkout,
}

impl<P> WhatsAppHandoffUseCase<P>
where
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, checkout: Checkout) -> Self {
        Self {
            plan_repo,
            checkout,
        }
    }

    /// Payment-proof link for `plan_type`, or the generic renewal link without one.
    pub async fn link_for(&self, plan_type: Option<PlanType>) -> Result<WhatsAppLinkDto> {
        let message = match plan_type {
            Some(plan_type) => {
                let plan = self
                    .plan_repo
                    .find_by_type(plan_type)
                    .await?
                    .ok_or_else(|| {
                        error!(%plan_type, "whatsapp_handoff: plan missing from catalog");
                        anyhow!("Plan {} is missing from the catalog", plan_type)
                    })?;
                whatsapp::payment_proof_message(&plan, &self.checkout.brand_name)
            }
            None => whatsapp::renewal_message(&self.checkout.brand_name),
        };

        let url = whatsapp::build_link(&self.checkout.whatsapp_number, &message);
        debug!(plan_type = ?plan_type, "whatsapp_handoff: link built");

        Ok(WhatsAppLinkDto { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::repositories::plans::MockPlanRepository,
        infrastructure::memory::plan_catalog::StaticPlanCatalog,
    };

    fn checkout() -> Checkout {
        Checkout {
            pix_key: "pix@example.com".to_string(),
            whatsapp_number: "5511912345678".to_string(),
            brand_name: "ZerionTV".to_string(),
        }
    }

    #[tokio::test]
    async fn plan_link_carries_payment_proof_message() {
        let usecase = WhatsAppHandoffUseCase::new(Arc::new(StaticPlanCatalog::new()), checkout());

        let link = usecase.link_for(Some(PlanType::Quarterly)).await.unwrap();

        assert!(link.url.starts_with("https://wa.me/5511912345678?text="));
        assert!(link.url.contains("Trimestral%20(R%2421)"));
        assert!(!link.url.contains(' '));
    }

    #[tokio::test]
    async fn no_plan_gives_renewal_link() {
        let usecase = WhatsAppHandoffUseCase::new(Arc::new(StaticPlanCatalog::new()), checkout());

        let link = usecase.link_for(None).await.unwrap();

        assert!(link.url.ends_with("renovar%20meu%20IPTV%20ZerionTV"));
    }

    #[tokio::test]
    async fn missing_catalog_plan_is_an_error() {
        let mut plan_repo = MockPlanRepository::new();
        plan_repo
            .expect_find_by_type()
            .returning(|_| Ok(None));

        let usecase = WhatsAppHandoffUseCase::new(Arc::new(plan_repo), checkout());

        assert!(usecase.link_for(Some(PlanType::Monthly)).await.is_err());
    }
}
