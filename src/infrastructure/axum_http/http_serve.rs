use crate::{
    application::usecases::{
        subscriptions::SubscriptionIntakeUseCase, whatsapp_handoff::WhatsAppHandoffUseCase,
    },
    config::config_model::DotEnvyConfig,
    domain::repositories::{plans::PlanRepository, subscriptions::SubscriptionRepository},
    infrastructure::axum_http::{default_routers, routers},
};
use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub async fn start<P, S>(
    config: Arc<DotEnvyConfig>,
    plan_repo: Arc<P>,
    subscription_repo: Arc<S>,
) -> Result<()>
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    let app = app(Arc::clone(&config), plan_repo, subscription_repo)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Full application router: checkout routes under `/api`, the catalog and intake
/// routes also unprefixed, plus the middleware stack.
pub fn app<P, S>(
    config: Arc<DotEnvyConfig>,
    plan_repo: Arc<P>,
    subscription_repo: Arc<S>,
) -> Result<Router>
where
    P: PlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    let intake_usecase = Arc::new(SubscriptionIntakeUseCase::new(
        Arc::clone(&plan_repo),
        subscription_repo,
        config.checkout.clone(),
    ));
    let handoff_usecase = Arc::new(WhatsAppHandoffUseCase::new(
        Arc::clone(&plan_repo),
        config.checkout.clone(),
    ));

    let checkout_routes = Router::new()
        .merge(routers::plans::routes(Arc::clone(&plan_repo)))
        .merge(routers::pix_key::routes(Arc::clone(&intake_usecase)));

    let api_routes = Router::new()
        .merge(checkout_routes.clone())
        .merge(routers::subscriptions::routes(intake_usecase))
        .merge(routers::whatsapp_link::routes(handoff_usecase))
        .route("/health-check", get(default_routers::health_check));

    let app = Router::new()
        .nest("/api", api_routes)
        .merge(checkout_routes)
        .fallback(default_routers::not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
