//! Glue Table API
//!
//! A thin HTTP facade over the AWS Glue Data Catalog table API. Every
//! endpoint makes a single catalog call and answers with one uniform
//! `{success, status, data | message}` body.

mod catalog;
mod config;
mod error;
mod models;
mod openapi;
mod routes;
mod state;

use crate::catalog::GlueCatalog;
use crate::config::Settings;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("Starting Glue Table API...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded: {:?}", settings.aws);

    // One catalog client for the whole process
    let catalog = GlueCatalog::from_settings(&settings.aws).await;
    let state = Arc::new(AppState::new(Arc::new(catalog)));

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("Server listening on http://{}", addr);
    info!("API Endpoints:");
    info!("   POST   /table/create_table");
    info!("   GET    /table/get_tables/{{DatabaseName}}");
    info!("   GET    /table/get_table/{{Name}}/{{DatabaseName}}");
    info!("   GET    /table/search_table/{{SearchText}}");
    info!("   DELETE /table/delete_table/{{Name}}/{{DatabaseName}}");
    info!("   PUT    /table/update_table");
    info!("   GET    /table/openapi.json");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,glue_table_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        },
    }
}
