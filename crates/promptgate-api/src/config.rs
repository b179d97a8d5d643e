//! Service configuration.
//!
//! Layered: built-in defaults, then an optional `promptgate.toml` next to the
//! binary, then `PROMPTGATE_*` environment variables. Loaded once at startup
//! and immutable afterwards.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface to bind the HTTP server to.
    pub host: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Base address of the downstream chat backend.
    pub backend_url: String,
    /// Bound on each backend call; expiry surfaces as a transport error.
    pub backend_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// Example override: `PROMPTGATE_BACKEND_URL=http://backend:8080`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("backend_url", "http://127.0.0.1:8080")?
            .set_default("backend_timeout_secs", 120)?
            .add_source(File::with_name("promptgate").required(false))
            .add_source(Environment::with_prefix("PROMPTGATE"))
            .build()?
            .try_deserialize()
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Backend call timeout as a [`Duration`].
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.backend_timeout_secs, 120);
        assert!(config.backend_url.starts_with("http://"));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            backend_url: "http://backend:8080".to_string(),
            backend_timeout_secs: 30,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.backend_timeout(), Duration::from_secs(30));
    }
}
