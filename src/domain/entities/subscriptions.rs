use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::enums::plan_types::PlanType;

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub plan_type: PlanType,
    pub price: i32,
    pub pix_key: String,
    pub whatsapp_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertSubscriptionEntity {
    pub plan_type: PlanType,
    pub price: i32,
    pub pix_key: String,
    pub whatsapp_number: String,
}
