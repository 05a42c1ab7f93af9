use crate::domain::value_objects::enums::plan_types::PlanType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntity {
    pub plan_type: PlanType,
    /// Whole reais.
    pub price: i32,
    pub name: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub savings: Option<String>,
}
