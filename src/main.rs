use ai_todo::config::Config;
use ai_todo::server::{build_router, AppState};
use ai_todo::translation::TranslationResolver;
use anyhow::{Context, Result};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ai_todo=info".parse()?),
        )
        .init();

    // Without an API key nothing is served
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {:#}", e);
            return Err(e);
        }
    };

    info!(
        model = %config.openai_model,
        "Starting AI todo app"
    );

    let state = AppState::new(TranslationResolver::from_config(&config));
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
