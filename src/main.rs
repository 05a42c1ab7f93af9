use anyhow::Result;
use pix_checkout::config::config_loader;
use pix_checkout::infrastructure::axum_http::http_serve;
use pix_checkout::infrastructure::memory::{
    plan_catalog::StaticPlanCatalog, subscription_store::InMemorySubscriptionStore,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("pix-checkout exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    pix_checkout::observability::init_observability("pix-checkout")?;

    let loaded = config_loader::load()?;
    for warning in &loaded.warnings {
        warn!(stage = %loaded.config.stage, warning = %warning, "Config warning");
    }
    info!(stage = %loaded.config.stage, "ENV has been loaded");

    let plan_catalog = Arc::new(StaticPlanCatalog::new());
    let subscription_store = Arc::new(InMemorySubscriptionStore::new());
    info!("In-memory subscription store has been created");

    http_serve::start(Arc::new(loaded.config), plan_catalog, subscription_store).await?;

    Ok(())
}
