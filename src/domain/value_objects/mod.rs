pub mod enums;
pub mod pix_key_request;
pub mod plans;
pub mod subscriptions;
pub mod whatsapp;
