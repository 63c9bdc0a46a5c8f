//! HTTP server for the Vacation Engine.
//!
//! Configuration comes from the environment:
//!
//! - `VACATION_CONFIG_DIR`: configuration directory (default `./config/vacation`)
//! - `VACATION_BIND`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `vacation_engine=info`)

use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vacation_engine::api::{AppState, create_router};
use vacation_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/vacation";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vacation_engine=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config_dir = env::var("VACATION_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind = env::var("VACATION_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(config_dir = %config_dir, error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(address = %bind, "Vacation engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
