use anyhow::{Context, Result, bail};

use super::{
    config_model::{Checkout, DotEnvyConfig, Server},
    stage::Stage,
};
use crate::domain::value_objects::whatsapp::{DEFAULT_BRAND_NAME, normalize_whatsapp_number};

/// Fallbacks for when the environment is silent.
/// Outside production they are still honoured, with a warning; production refuses them.
pub const DEFAULT_PIX_KEY: &str = "0a75a2c4-cc9b-448a-ae90-ca3102b20592";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5511920752428";

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_BODY_LIMIT_MB: u64 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: DotEnvyConfig,
    /// Collected while parsing; logged once tracing is up.
    pub warnings: Vec<String>,
}

pub fn load() -> Result<LoadedConfig> {
    load_from(|key| std::env::var(key).ok())
}

pub fn load_from<F>(lookup: F) -> Result<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();
    let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let stage = match value("STAGE") {
        Some(raw) => match Stage::try_from(&raw) {
            Ok(stage) => stage,
            Err(_) => {
                warnings.push(format!("STAGE is invalid (value: {raw}); defaulting to local"));
                Stage::default()
            }
        },
        None => Stage::default(),
    };

    let server = Server {
        port: match value("SERVER_PORT") {
            Some(raw) => raw.parse().context("SERVER_PORT is invalid")?,
            None => DEFAULT_SERVER_PORT,
        },
        body_limit: match value("SERVER_BODY_LIMIT") {
            Some(raw) => raw.parse().context("SERVER_BODY_LIMIT is invalid")?,
            None => DEFAULT_BODY_LIMIT_MB,
        },
        timeout: match value("SERVER_TIMEOUT") {
            Some(raw) => raw.parse().context("SERVER_TIMEOUT is invalid")?,
            None => DEFAULT_TIMEOUT_SECS,
        },
    };

    let pix_key = match value("PIX_KEY") {
        Some(pix_key) => pix_key,
        None if stage.is_production() => bail!("PIX_KEY must be set in production"),
        None => {
            warnings.push("PIX_KEY is not set; using the built-in default PIX key".to_string());
            DEFAULT_PIX_KEY.to_string()
        }
    };

    let raw_whatsapp_number = match value("WHATSAPP_NUMBER") {
        Some(number) => number,
        None if stage.is_production() => bail!("WHATSAPP_NUMBER must be set in production"),
        None => {
            warnings.push(
                "WHATSAPP_NUMBER is not set; using the built-in default contact number"
                    .to_string(),
            );
            DEFAULT_WHATSAPP_NUMBER.to_string()
        }
    };
    let whatsapp_number =
        normalize_whatsapp_number(&raw_whatsapp_number).context("WHATSAPP_NUMBER is invalid")?;

    let checkout = Checkout {
        pix_key,
        whatsapp_number,
        brand_name: value("BRAND_NAME").unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
    };

    Ok(LoadedConfig {
        config: DotEnvyConfig {
            server,
            checkout,
            stage,
        },
        warnings,
    })
}
