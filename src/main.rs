//! Vitrine - portfolio API backend

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine::{config::Args, db::MongoStore, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vitrine={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("==============================");
    info!("  Vitrine - Portfolio API");
    info!("==============================");
    info!("Listen: {}", args.listen_addr());
    info!("Database: {}", args.effective_database_name());

    // Degraded mode on connection failure: reads serve empty results,
    // writes fail with a connectivity error.
    let store = match MongoStore::connect(
        args.effective_database_url(),
        args.effective_database_name(),
    )
    .await
    {
        Ok(store) => {
            info!("MongoDB connected successfully");
            Some(store)
        }
        Err(e) => {
            warn!("MongoDB connection failed (continuing without store): {}", e);
            None
        }
    };

    let state = Arc::new(server::AppState::new(args, store));

    if let Err(e) = server::run(state).await {
        error!("Server error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
