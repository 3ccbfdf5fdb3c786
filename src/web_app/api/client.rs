// web_app/api/client.rs - Outbound HTTP client setup
//
// The client is built once at startup and registered globally so server
// functions can reach it, with an override slot for tests.

use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

use super::error::FetchError;

pub const DEFAULT_PRODUCTS_URL: &str = "https://api.escuelajs.co/api/v1/products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceLock<ProductsClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ProductsClient>> = Mutex::new(None);

/// Where and how to reach the products API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub products_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Reads `PRODUCTS_API_URL` and `PRODUCTS_API_TIMEOUT_SECS`, falling back
    /// to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let products_url = lookup("PRODUCTS_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.products_url);

        let timeout = match lookup("PRODUCTS_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!("Ignoring invalid PRODUCTS_API_TIMEOUT_SECS={:?}", raw);
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self { products_url, timeout }
    }
}

/// HTTP client bound to one products endpoint. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ProductsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ProductsClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Initialize the global products client
pub fn init_client(client: ProductsClient) {
    tracing::info!("Initializing products client for {}", client.config.products_url);
    if CLIENT.set(client).is_err() {
        tracing::warn!("Products client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: Option<ProductsClient>) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = client;
}

/// Get the global products client
pub fn get_client() -> Option<ProductsClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Products client has not been initialized");
    }
    client
}
