pub mod plan_catalog;
pub mod subscription_store;
