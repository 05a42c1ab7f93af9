pub mod pix_key;
pub mod plans;
pub mod subscriptions;
pub mod whatsapp_link;
