use anyhow::Context;
use shopping_list_rust::config::ServerConfig;
use shopping_list_rust::items::AppState;
use shopping_list_rust::router::create_app_router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration and initialize application state
    let config = ServerConfig::from_env()?;
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.bind_address();
    info!("Server running on http://{}", addr);

    // Start the server; a bind failure exits the process with an error
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
