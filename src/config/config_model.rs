use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub checkout: Checkout,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    /// Request body limit in MiB.
    pub body_limit: u64,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Values copied into every subscription record and used for the WhatsApp hand-off.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub pix_key: String,
    pub whatsapp_number: String,
    pub brand_name: String,
}
