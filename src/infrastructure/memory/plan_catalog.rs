use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{
    entities::plans::PlanEntity, repositories::plans::PlanRepository,
    value_objects::enums::plan_types::PlanType,
};

/// The fixed three-plan catalog, built once at startup and never mutated.
pub struct StaticPlanCatalog {
    plans: Vec<PlanEntity>,
}

impl StaticPlanCatalog {
    pub fn new() -> Self {
        Self {
            plans: PlanType::ALL.into_iter().map(catalog_entry).collect(),
        }
    }
}

impl Default for StaticPlanCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn catalog_entry(plan_type: PlanType) -> PlanEntity {
    match plan_type {
        PlanType::Monthly => PlanEntity {
            plan_type,
            price: 8,
            name: "Mensal".to_string(),
            features: features(&["Suporte 24h", "Todos os dispositivos"]),
            popular: false,
            savings: None,
        },
        PlanType::Quarterly => PlanEntity {
            plan_type,
            price: 21,
            name: "Trimestral".to_string(),
            features: features(&[
                "Suporte prioritário",
                "Todos os dispositivos",
                "Canais Premium inclusos",
            ]),
            popular: true,
            savings: Some("Economize R$3".to_string()),
        },
        PlanType::Annual => PlanEntity {
            plan_type,
            price: 79,
            name: "Anual".to_string(),
            features: features(&[
                "Suporte VIP",
                "Todos os dispositivos",
                "Todos os Premium",
                "Bônus especiais",
            ]),
            popular: false,
            savings: Some("Economize R$17".to_string()),
        },
    }
}

// Every plan opens with the same two selling points.
fn features(extra: &[&str]) -> Vec<String> {
    ["+ de 10.000 canais", "Qualidade HD/4K"]
        .iter()
        .chain(extra)
        .map(|f| f.to_string())
        .collect()
}

#[async_trait]
impl PlanRepository for StaticPlanCatalog {
    async fn list_plans(&self) -> Result<Vec<PlanEntity>> {
        Ok(self.plans.clone())
    }

    async fn find_by_type(&self, plan_type: PlanType) -> Result<Option<PlanEntity>> {
        Ok(self
            .plans
            .iter()
            .find(|plan| plan.plan_type == plan_type)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_three_plans_in_catalog_order() {
        let catalog = StaticPlanCatalog::new();
        let plans = catalog.list_plans().await.unwrap();

        let summary: Vec<(PlanType, i32, &str)> = plans
            .iter()
            .map(|p| (p.plan_type, p.price, p.name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (PlanType::Monthly, 8, "Mensal"),
                (PlanType::Quarterly, 21, "Trimestral"),
                (PlanType::Annual, 79, "Anual"),
            ]
        );
    }

    #[tokio::test]
    async fn quarterly_is_the_popular_plan() {
        let catalog = StaticPlanCatalog::new();
        let quarterly = catalog
            .find_by_type(PlanType::Quarterly)
            .await
            .unwrap()
            .unwrap();

        assert!(quarterly.popular);
        assert_eq!(quarterly.savings.as_deref(), Some("Economize R$3"));
        assert_eq!(
            quarterly.features,
            vec![
                "+ de 10.000 canais",
                "Qualidade HD/4K",
                "Suporte prioritário",
                "Todos os dispositivos",
                "Canais Premium inclusos",
            ]
        );
    }

    #[tokio::test]
    async fn annual_lists_six_features() {
        let catalog = StaticPlanCatalog::new();
        let annual = catalog.find_by_type(PlanType::Annual).await.unwrap().unwrap();

        assert!(!annual.popular);
        assert_eq!(annual.features.len(), 6);
        assert_eq!(annual.features.last().map(String::as_str), Some("Bônus especiais"));
    }
}
