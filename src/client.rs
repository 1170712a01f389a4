use crate::endpoint::{Endpoint, Host};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// User-Agent attached to every request
pub const USER_AGENT: &str = concat!("chirp/", env!("CARGO_PKG_VERSION"));

/// Create the default HTTP client for API requests
/// with settings for connection pooling and timeouts
pub fn create_http_client() -> Client {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(50)
        .timeout(Duration::from_secs(300)) // 5 minutes
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// Main API host
    pub api_host: String,
    /// Search API host
    pub search_host: String,
    /// Media upload host
    pub upload_host: String,
    /// Enable debug logging to stderr
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "https".to_string(),
            api_host: "api.twitter.com/1".to_string(),
            search_host: "search.twitter.com".to_string(),
            upload_host: "upload.twitter.com/1".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Create a configuration pointing every host class at the same
    /// scheme/host pair. Mainly useful for tests against a local server.
    pub fn new(scheme: String, host: String) -> Self {
        Config {
            scheme,
            api_host: host.clone(),
            search_host: host.clone(),
            upload_host: host,
            debug: false,
        }
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get the base URL for a host class
    pub fn base_url(&self, host: Host) -> String {
        let host = match host {
            Host::Api => &self.api_host,
            Host::Search => &self.search_host,
            Host::Upload => &self.upload_host,
        };
        format!("{}://{}", self.scheme, host)
    }

    /// Resolve an endpoint to its absolute URL
    pub fn resolve(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url(endpoint.host), endpoint.path)
    }
}
