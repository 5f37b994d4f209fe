use std::sync::Arc;
use tabungan_relay::{api::start_server, Dispatcher, RelayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = RelayConfig::from_env().map_err(|e| {
        eprintln!("⚠️  {}", e);
        eprintln!("📌 See .env.example for setup instructions");
        e
    })?;

    info!("🚀 Savings Webhook Relay");
    info!("📍 Port: {}", config.port);
    info!("🏦 Banking backend: {}", config.banking_base_url);
    info!("🤖 AI agent: {}", config.ai_agent_url);

    let dispatcher = Arc::new(Dispatcher::from_config(&config)?);

    info!("✅ Dispatcher initialized");

    start_server(dispatcher, config.port).await?;

    Ok(())
}
