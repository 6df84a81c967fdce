// EmotionChat Backend Entry Point
// Chat API where every message is annotated with its emotional tone

mod api;
mod chat;
mod config;
mod database;
mod error;
mod models;
mod sentiment;
mod telemetry;

#[cfg(test)]
mod tests;

use anyhow::Context;
use chat::ChatService;
use config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing(telemetry::LogFormat::from_env())?;

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let pool = database::init_db(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    let analyzer = sentiment::build_analyzer(&config.sentiment)?;
    let service = ChatService::new(pool, analyzer);
    let app = api::router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("EmotionChat listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("EmotionChat stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
