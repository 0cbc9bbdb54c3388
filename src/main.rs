use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use product_catalog::api::{RouterOptions, create_router_with_options};
use product_catalog::app::AppState;
use product_catalog::config::AppConfig;
use product_catalog::infra::{InMemoryProductRepository, init_metrics_handle, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let metrics_handle = if config.metrics_enabled {
        let handle = init_metrics_handle();
        if handle.is_none() {
            warn!("Failed to install Prometheus recorder; /metrics disabled");
        }
        handle
    } else {
        None
    };

    // Infrastructure, then use cases on top of it
    let repository = Arc::new(InMemoryProductRepository::new());
    let app_state = Arc::new(AppState::new(repository).with_metrics(metrics_handle));

    let options = RouterOptions {
        api_docs: config.development,
    };
    let router = create_router_with_options(app_state, options);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, development = config.development, "Server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
