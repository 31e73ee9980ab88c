//! Web frontend server binary
//!
//! Serves the task list UI and proxies form submissions to the task
//! store. Startup is fatal without `API_GATEWAY_URL` — the listener is
//! never bound when the backend location is unknown.

use taskweb::client::TaskStoreClient;
use taskweb::config::WebConfig;
use taskweb::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    // Load configuration once; a missing gateway URL halts startup here
    let config = WebConfig::from_env()?;
    tracing::info!(
        gateway = %config.api_gateway_url,
        timeout_secs = config.request_timeout.as_secs(),
        "loaded configuration"
    );

    let client = TaskStoreClient::new(config.api_gateway_url.clone(), config.request_timeout)?;
    let app = create_router(client);

    let addr = config.bind_addr();
    tracing::info!(%addr, "starting web frontend server");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("web frontend server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL-C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM signal, shutting down");
        }
    }
}
