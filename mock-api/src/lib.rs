pub mod catalog;
pub mod routes;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use secrecy::{ExposeSecret, SecretBox};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::catalog::Catalog;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, catalog: Catalog) -> std::io::Result<Server> {
    let settings = web::Data::new(ProviderSettings::from(&*config));
    let catalog = web::Data::new(catalog);

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    tracing::info!(
        port = config.port,
        movies = catalog.len(),
        "movie database stand-in bound"
    );

    let server = HttpServer::new(move || {
        // The UI is served from a different origin during development
        let cors = if allowed_origins.contains(&"*".to_string()) {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors = Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(settings.clone())
            .app_data(catalog.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
    /// Requests must carry this key when set
    pub api_key: Option<SecretBox<String>>,
    /// Delay added before every movie response
    pub latency: Duration,
    /// Answer movie requests with a non-JSON body
    pub malformed_responses: bool,
    /// Shared with every handler; clone it to watch traffic from outside
    pub request_counts: RequestCounts,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let latency_ms: u64 = match var("MOCK_LATENCY_MS") {
            Ok(ms) => ms.parse()?,
            Err(_) => 0,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 8000,
            },
            allowed_origins,
            api_key: var("MOVIE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty())
                .map(|key| SecretBox::new(Box::new(key))),
            latency: Duration::from_millis(latency_ms),
            malformed_responses: var("MOCK_MALFORMED_RESPONSES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            request_counts: RequestCounts::default(),
        })
    }
}

/// The per-request behaviour knobs from [`Config`], shared with handlers.
pub struct ProviderSettings {
    pub api_key: Option<SecretBox<String>>,
    pub latency: Duration,
    pub malformed_responses: bool,
    pub request_counts: RequestCounts,
}

impl ProviderSettings {
    pub fn accepts_key(&self, key: Option<&str>) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => key == Some(expected.expose_secret().as_str()),
        }
    }
}

impl From<&Config> for ProviderSettings {
    fn from(config: &Config) -> Self {
        Self {
            api_key: config.api_key.as_ref().map(|key| {
                SecretBox::new(Box::new(key.expose_secret().clone()))
            }),
            latency: config.latency,
            malformed_responses: config.malformed_responses,
            request_counts: config.request_counts.clone(),
        }
    }
}

/// Number of accepted movie requests, by kind.
#[derive(Debug, Clone, Default)]
pub struct RequestCounts {
    searches: Arc<AtomicUsize>,
    lookups: Arc<AtomicUsize>,
}

impl RequestCounts {
    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn record_search(&self) {
        self.searches.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::SeqCst);
    }
}
