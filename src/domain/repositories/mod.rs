pub mod plans;
pub mod subscriptions;
