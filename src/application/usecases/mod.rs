pub mod plans;
pub mod subscriptions;
pub mod whatsapp_handoff;
