//! Application State
//!
//! Shared state accessible by all API handlers. The catalog is compiled-in
//! static data, so the state is cheap to clone and carries no locks.

use crate::catalog::Catalog;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The read-only reference catalog
    pub catalog: &'static Catalog,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over the global catalog
    pub fn new(config: ApiConfig) -> Self {
        Self {
            catalog: Catalog::global(),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Park selector applied when a request omits it
    pub default_park: String,
    /// Feature selector applied when a request omits it
    pub default_feature: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8088,
            request_timeout_ms: 30_000,
            default_park: crate::catalog::ALL_PARKS.to_string(),
            default_feature: crate::catalog::ALL_FEATURES.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr() {
        let config = ApiConfig::new("127.0.0.1", 9000);
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_state_shares_global_catalog() {
        let a = AppState::new(ApiConfig::default());
        let b = AppState::new(ApiConfig::default());
        assert!(std::ptr::eq(a.catalog, b.catalog));
    }
}
