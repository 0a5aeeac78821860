//! Development server for Cinema Center UI development
//!
//! This binary runs the movie database stand-in with the demo catalog so the
//! UI can be developed without an external api key.
//!
//! Usage: cargo run -p dev-server
//!
//! Environment variables (optionally from a .env file):
//! - IP_ADDRESS: bind address, defaults to 127.0.0.1
//! - PORT: bind port, defaults to 8000 (0 for an os-assigned port)
//! - ALLOWED_ORIGINS: CORS origins, defaults to "*"
//! - MOVIE_API_KEY: require this api key on every request
//! - MOCK_LATENCY_MS: delay each movie response, useful for watching
//!   superseded searches get discarded
//! - MOCK_MALFORMED_RESPONSES: set to 1 to answer with non-JSON bodies

use anyhow::Result;
use mock_api::{
    Config,
    catalog::Catalog,
    telemetry::{get_subscriber, init_subscriber},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if available
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;
    let catalog = Catalog::demo();

    info!("🚀 Starting Cinema Center development server");
    if !config.latency.is_zero() {
        info!("🐢 Adding {:?} latency to every response", config.latency);
    }
    if config.malformed_responses {
        info!("💥 Answering movie requests with malformed bodies");
    }

    let server = mock_api::build(&mut config, catalog)?;

    info!("🎯 Development server ready!");
    info!("   API: http://{}:{}", config.ip, config.port);
    info!(
        "   UI:  cd ui && MOVIE_API_URL=http://{}:{} trunk serve",
        config.ip, config.port
    );
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = server => result?,
        _ = tokio::signal::ctrl_c() => info!("🛑 Shutting down development server"),
    }
    Ok(())
}
