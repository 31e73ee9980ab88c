//! Task store server binary
//!
//! Standalone CRUD service over the tasks table. In deployment an API
//! gateway sits in front; locally it serves the contract directly.

use taskstore::api::routes::create_router;
use taskstore::config::StoreConfig;
use taskstore::db::DatabaseConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    // Load configuration once; handlers only ever see the resulting state
    let config = StoreConfig::from_env()?;
    tracing::info!(database_url = %config.database_url, "loaded configuration");

    // Initialize database connection
    tracing::info!("connecting to database");
    let db = DatabaseConnection::new(&config.database_url).await?;

    // Run migrations and verify connectivity before binding
    tracing::info!("running database migrations");
    db.run_migrations().await?;
    db.health_check().await?;

    // Build the router
    let app = create_router(db);

    let addr = config.bind_addr();
    tracing::info!(%addr, "starting task store server");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("task store server shut down gracefully");
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
