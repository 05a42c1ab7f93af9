use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Monthly,
    Quarterly,
    Annual,
}

impl PlanType {
    /// Catalog order.
    pub const ALL: [PlanType; 3] = [PlanType::Monthly, PlanType::Quarterly, PlanType::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Monthly => "monthly",
            PlanType::Quarterly => "quarterly",
            PlanType::Annual => "annual",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(PlanType::Monthly),
            "quarterly" => Some(PlanType::Quarterly),
            "annual" => Some(PlanType::Annual),
            _ => None,
        }
    }
}

impl Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(PlanType::from_str("monthly"), Some(PlanType::Monthly));
        assert_eq!(PlanType::from_str("Monthly"), None);
        assert_eq!(PlanType::from_str("weekly"), None);
    }

    #[test]
    fn serde_uses_wire_labels() {
        assert_eq!(
            serde_json::to_string(&PlanType::Quarterly).unwrap(),
            "\"quarterly\""
        );
        for plan_type in PlanType::ALL {
            assert_eq!(PlanType::from_str(&plan_type.to_string()), Some(plan_type));
        }
    }
}
