//! Car pooling service binary.
//!
//! Loads configuration from the environment (with dotenv support),
//! initializes telemetry, builds the single process-wide dispatcher, and
//! serves the HTTP API until shutdown.

use anyhow::Context;
use tracing::info;

use carpool_dispatch::config::ServiceConfig;
use carpool_dispatch::core::Dispatcher;
use carpool_dispatch::http::{router, AppState};
use carpool_dispatch::util::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let config = ServiceConfig::from_env().context("loading configuration")?;
    info!(
        bind_addr = %config.bind_addr,
        strict_add = config.policy.strict_add,
        "starting car pooling service"
    );

    let state = AppState::new(Dispatcher::new(config.policy));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
