//! Run with debugging output:
//!
//! ```shell
//! RUST_LOG=ui_tests=debug,mock_api=info cargo test -p ui-tests -- --nocapture
//! ```

use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder, Locator, elements::Element};
use rand::Rng;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use test_helpers::{TEST_API_KEY, TestApp};
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// How long to wait for an element before giving up.
pub const ELEMENT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct TestEnvironment {
    pub api: TestApp,
    pub browser: Client,
    pub frontend_process: Child,
    pub geckodriver_process: Child,
    pub frontend_url: String,
}

impl TestEnvironment {
    /// Headless environment in front of an already spawned stand-in.
    #[cfg(test)]
    pub async fn setup(api: TestApp) -> Result<Self> {
        Self::setup_with_options(api, false).await
    }

    pub async fn setup_headed(api: TestApp) -> Result<Self> {
        Self::setup_with_options(api, true).await
    }

    async fn setup_with_options(api: TestApp, headed: bool) -> Result<Self> {
        info!("🔧 Setting up test environment");

        let api_url = format!("http://localhost:{}", api.port);
        info!("✅ Movie database stand-in running on {}", api_url);

        info!("🦎 Starting geckodriver");
        let (geckodriver_process, gecko_port) =
            start_geckodriver_with_retry(4444).await?;
        info!("✅ Geckodriver running on port {}", gecko_port);

        info!("🎨 Starting frontend");
        let (frontend_process, frontend_port) =
            start_frontend_with_retry(8080, &api_url).await?;
        let frontend_url = format!("http://localhost:{}", frontend_port);

        wait_for_frontend(&frontend_url).await?;
        info!("✅ Frontend ready at {}", frontend_url);

        info!("🌐 Connecting to browser");
        let browser = connect_to_browser(gecko_port, headed).await?;
        browser.goto(&frontend_url).await?;
        wait_for(&browser, "#movie-search").await?;
        info!("✅ Browser connected");

        Ok(TestEnvironment {
            api,
            browser,
            frontend_process,
            geckodriver_process,
            frontend_url,
        })
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        info!("🧹 Cleaning up test environment");

        if let Err(e) = self.frontend_process.kill() {
            warn!("Failed to kill frontend process: {}", e);
        }

        if let Err(e) = self.geckodriver_process.kill() {
            warn!("Failed to kill geckodriver process: {}", e);
        }

        info!("✅ Cleanup complete");
    }
}

async fn start_geckodriver_with_retry(base_port: u16) -> Result<(Child, u16)> {
    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!(
            "Attempting to start geckodriver on port {} (attempt {})",
            port, attempt
        );

        match Command::new("geckodriver")
            .arg("--port")
            .arg(port.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                sleep(Duration::from_millis(500)).await;

                // Still running means the port was free
                match child.try_wait() {
                    Ok(Some(status)) => {
                        debug!(
                            "Geckodriver exited with status {}, trying different port",
                            status
                        );
                    }
                    Ok(None) => return Ok((child, port)),
                    Err(e) => {
                        debug!("Error checking geckodriver status: {}", e);
                        let _ = child.kill();
                    }
                }
            }
            Err(e) => {
                debug!("Failed to start geckodriver: {}", e);
            }
        }

        if attempt < 5 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    Err(anyhow::anyhow!("Failed to start geckodriver after 5 attempts"))
}

/// Build the ui pointed at `api_url` and serve it.
///
/// The address and key are compiled in, so every environment builds.
async fn start_frontend_with_retry(
    base_port: u16,
    api_url: &str,
) -> Result<(Child, u16)> {
    debug!("Building frontend with trunk build");
    let build_result = Command::new("trunk")
        .arg("build")
        .current_dir("../ui")
        .env("MOVIE_API_URL", api_url)
        .env("MOVIE_API_KEY", TEST_API_KEY)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match build_result {
        Ok(status) if status.success() => debug!("Frontend build successful"),
        Ok(status) => {
            return Err(anyhow::anyhow!(
                "Frontend build failed with status: {}",
                status
            ));
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to run trunk build: {}", e));
        }
    }

    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!(
            "Attempting to start frontend on port {} (attempt {})",
            port, attempt
        );

        match Command::new("trunk")
            .arg("serve")
            .arg("--port")
            .arg(port.to_string())
            .current_dir("../ui")
            .env("MOVIE_API_URL", api_url)
            .env("MOVIE_API_KEY", TEST_API_KEY)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                sleep(Duration::from_millis(500)).await;

                match child.try_wait() {
                    Ok(Some(status)) => {
                        debug!(
                            "Frontend exited with status {}, trying different port",
                            status
                        );
                    }
                    Ok(None) => return Ok((child, port)),
                    Err(e) => {
                        debug!("Error checking frontend status: {}", e);
                        let _ = child.kill();
                    }
                }
            }
            Err(e) => {
                debug!("Failed to start frontend: {}", e);
            }
        }

        if attempt < 5 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    Err(anyhow::anyhow!("Failed to start frontend after 5 attempts"))
}

async fn wait_for_frontend(url: &str) -> Result<()> {
    for i in 1..=30 {
        match reqwest::get(url).await {
            Ok(response) if response.status().is_success() => {
                debug!("Frontend ready after {} attempts", i);
                return Ok(());
            }
            _ => sleep(Duration::from_secs(1)).await,
        }
    }
    Err(anyhow::anyhow!("Frontend failed to start after 30 attempts"))
}

async fn connect_to_browser(gecko_port: u16, headed: bool) -> Result<Client> {
    let gecko_url = format!("http://localhost:{}", gecko_port);

    let mut caps = serde_json::Map::new();
    let firefox_opts = if headed {
        info!("🖥️ Starting browser in headed mode");
        serde_json::json!({
            "log": {"level": "error"}
        })
    } else {
        info!("👻 Starting browser in headless mode");
        serde_json::json!({
            "args": ["--headless"],
            "log": {"level": "error"}
        })
    };
    caps.insert("moz:firefoxOptions".to_string(), firefox_opts);

    let client = ClientBuilder::native()
        .capabilities(caps)
        .connect(&gecko_url)
        .await
        .context("Failed to connect to geckodriver")?;

    Ok(client)
}

/// Wait until an element matching `css` is on the page.
pub async fn wait_for(browser: &Client, css: &str) -> Result<Element> {
    browser
        .wait()
        .at_most(ELEMENT_TIMEOUT)
        .for_element(Locator::Css(css))
        .await
        .with_context(|| format!("Timed out waiting for {css}"))
}

pub async fn is_present(browser: &Client, css: &str) -> Result<bool> {
    Ok(!browser.find_all(Locator::Css(css)).await?.is_empty())
}

/// Type `text` into the search box and press the Search button.
pub async fn search_for(browser: &Client, text: &str) -> Result<()> {
    info!("🔍 Searching for {:?}", text);
    let input = browser.find(Locator::Id("movie-search")).await?;
    input.click().await?;
    input.clear().await?;
    input.send_keys(text).await?;

    browser.find(Locator::Id("search-button")).await?.click().await?;
    Ok(())
}

/// Text of every row in the result list, empty when no list is shown.
pub async fn result_titles(browser: &Client) -> Result<Vec<String>> {
    let rows = browser.find_all(Locator::Css("#search-results li")).await?;
    let mut titles = Vec::with_capacity(rows.len());
    for row in rows {
        titles.push(row.text().await?);
    }
    Ok(titles)
}

/// Wait until the result list has a row containing `title`.
pub async fn wait_for_result(browser: &Client, title: &str) -> Result<Vec<String>> {
    let deadline = tokio::time::Instant::now() + ELEMENT_TIMEOUT;
    loop {
        let titles = result_titles(browser).await?;
        if titles.iter().any(|row| row.contains(title)) {
            return Ok(titles);
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(anyhow::anyhow!(
                "No result containing {title:?}, rows were {titles:?}"
            ));
        }
        sleep(Duration::from_millis(100)).await;
    }
}

/// Click the result row containing `title`.
pub async fn select_result(browser: &Client, title: &str) -> Result<()> {
    let xpath = format!(
        "//ul[@id='search-results']//button[contains(., '{title}')]"
    );
    browser.find(Locator::XPath(&xpath)).await?.click().await?;
    Ok(())
}
