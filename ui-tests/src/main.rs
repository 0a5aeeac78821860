//! This crate uses standard Rust tests with #[tokio::test]
//! Run with: cargo test -p ui-tests
//!
//! For human-in-the-loop debugging, main() starts the stand-in with the demo
//! catalog and some latency, and opens a headed browser on the search page.

use anyhow::Result;
use std::time::Duration;
use tracing::info;

#[cfg_attr(not(test), allow(dead_code))]
mod framework;
#[cfg(test)]
mod details;
#[cfg(test)]
mod search;

use crate::framework::TestEnvironment;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting UI test environment");

    // Slow enough to watch loading states and superseded searches
    let api = test_helpers::spawn_slow_app(Duration::from_millis(800)).await;
    let env = TestEnvironment::setup_headed(api).await?;

    info!("📋 Test Environment Summary:");
    info!("   🎬 Demo catalog, 800ms latency per movie request");
    info!("   🌐 Frontend at {}", env.frontend_url);
    info!("");
    info!("🎯 You can now test:");
    info!("   • Searching (\"alien\" has two pages)");
    info!("   • Searching again before a slow answer arrives");
    info!("   • Opening and closing movie details");
    info!("👋 Press Ctrl+C to exit and close the browser");

    tokio::signal::ctrl_c().await?;
    info!(
        "📝 Served {} searches and {} lookups",
        env.api.requests.searches(),
        env.api.requests.lookups()
    );

    info!("🧹 Cleaning up and closing browser");
    Ok(())
}
