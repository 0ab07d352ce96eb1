use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokemon_review_api::{app, config, database::DatabaseManager, is_production, AppState};

#[derive(Parser)]
#[command(name = "pokemon-review-api", version, about = "Pokemon review REST API")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite URL (overrides DATABASE_URL), e.g. sqlite://pokemon_review.db?mode=rwc
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = config::config().clone();
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    tracing::info!("Starting Pokemon Review API in {:?} mode", config.environment);
    if is_production!() && config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET must be set in production");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database")?;
    let state = AppState::new(pool.clone(), &config).context("invalid security configuration")?;
    let app = app(state, &config.security);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Pokemon Review API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
