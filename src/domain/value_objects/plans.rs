use serde::Serialize;

use crate::domain::{entities::plans::PlanEntity, value_objects::enums::plan_types::PlanType};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanDto {
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub price: i32,
    pub name: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
}

impl From<PlanEntity> for PlanDto {
    fn from(value: PlanEntity) -> Self {
        Self {
            plan_type: value.plan_type,
            price: value.price,
            name: value.name,
            features: value.features,
            popular: value.popular.then_some(true),
            savings: value.savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted_when_unset() {
        let dto = PlanDto::from(PlanEntity {
            plan_type: PlanType::Monthly,
            price: 8,
            name: "Mensal".to_string(),
            features: vec!["Suporte 24h".to_string()],
            popular: false,
            savings: None,
        });

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "type": "monthly",
                "price": 8,
                "name": "Mensal",
                "features": ["Suporte 24h"],
            })
        );
    }
}
