use std::time::Duration;

use mock_api::{Config, RequestCounts, catalog::Catalog, telemetry};
use payloads::{APIClient, MovieId, SearchQuery};
use reqwest::StatusCode;
use secrecy::SecretBox;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

/// Key the spawned server expects on every request.
pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    /// Movie requests the server has accepted so far
    pub requests: RequestCounts,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// A client for the same server that sends a different api key.
    pub fn client_with_api_key(&self, api_key: &str) -> APIClient {
        new_client(self.address(), api_key)
    }

    /// Search the first page for `text`.
    pub async fn search(
        &self,
        text: &str,
    ) -> Result<payloads::SearchPage, payloads::ClientError> {
        self.client.search_movies(&SearchQuery::new(text)).await
    }

    pub async fn details(
        &self,
        id: &str,
    ) -> Result<payloads::MovieDetails, payloads::ClientError> {
        self.client.get_movie_details(&MovieId::new(id)).await
    }
}

/// Settings for a test server; tweak the fields before spawning.
pub fn test_config() -> Config {
    Config {
        ip: "127.0.0.1".into(),
        port: 0,
        allowed_origins: vec!["*".to_string()],
        api_key: Some(SecretBox::new(Box::new(TEST_API_KEY.to_string()))),
        latency: Duration::ZERO,
        malformed_responses: false,
        request_counts: RequestCounts::default(),
    }
}

pub async fn spawn_app_with(mut config: Config, catalog: Catalog) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let server = mock_api::build(&mut config, catalog)
        .expect("Failed to bind movie database stand-in");
    tokio::spawn(server);
    tracing::debug!(port = config.port, "spawned test app");

    let address = format!("http://127.0.0.1:{}", config.port);
    TestApp {
        port: config.port,
        client: new_client(address, TEST_API_KEY),
        requests: config.request_counts.clone(),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(), Catalog::demo()).await
}

/// A server holding `count` generated titles starting with `prefix`.
pub async fn spawn_app_with_generated(prefix: &str, count: usize) -> TestApp {
    spawn_app_with(test_config(), Catalog::generated(prefix, count)).await
}

/// A server that waits `latency` before answering each movie request.
pub async fn spawn_slow_app(latency: Duration) -> TestApp {
    let config = Config {
        latency,
        ..test_config()
    };
    spawn_app_with(config, Catalog::demo()).await
}

/// A server that answers every movie request with a non-JSON 200.
pub async fn spawn_misbehaving_app() -> TestApp {
    let config = Config {
        malformed_responses: true,
        ..test_config()
    };
    spawn_app_with(config, Catalog::demo()).await
}

fn new_client(address: String, api_key: &str) -> APIClient {
    APIClient {
        address,
        api_key: SecretBox::new(Box::new(api_key.to_string())),
        inner_client: reqwest::Client::new(),
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
