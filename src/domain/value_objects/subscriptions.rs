use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::SubscriptionEntity, value_objects::enums::plan_types::PlanType,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PixKeyResponse {
    pub pix_key: String,
    pub whatsapp_number: String,
    pub subscription_id: String,
}

impl From<SubscriptionEntity> for PixKeyResponse {
    fn from(value: SubscriptionEntity) -> Self {
        Self {
            pix_key: value.pix_key,
            whatsapp_number: value.whatsapp_number,
            subscription_id: value.id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub id: Uuid,
    pub plan_type: PlanType,
    pub price: i32,
    pub pix_key: String,
    pub whatsapp_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionEntity> for SubscriptionDto {
    fn from(value: SubscriptionEntity) -> Self {
        Self {
            id: value.id,
            plan_type: value.plan_type,
            price: value.price,
            pix_key: value.pix_key,
            whatsapp_number: value.whatsapp_number,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WhatsAppLinkDto {
    pub url: String,
}
