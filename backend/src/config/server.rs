//! HTTP server settings: bind address, request timeout, CORS and log filter.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use serde::Deserialize;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Settings consumed by `main` and `app_router`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind; IPv6 literals need no brackets
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated origins allowed by CORS; unset disables CORS
    pub cors_origins: Option<String>,
}

/// Production switches logs to JSON and requires an HTTPS asset kit link.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress)?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parsed CORS origins, empty when CORS is off.
    ///
    /// Blank entries are skipped. Every other entry must carry an
    /// `http://` or `https://` scheme.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ValidationError> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Ok(Vec::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                let has_scheme = origin.starts_with("http://") || origin.starts_with("https://");
                HeaderValue::from_str(origin)
                    .ok()
                    .filter(|_| has_scheme)
                    .ok_or_else(|| ValidationError::InvalidCorsOrigin(origin.to_string()))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,franchise_calculator=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn default_log_filter_is_a_valid_directive() {
        let config = ServerConfig::default();
        assert!(EnvFilter::try_new(&config.log_level).is_ok());
        assert!(config.log_level.contains("franchise_calculator=debug"));
    }

    #[test]
    fn binds_ipv4_and_bare_ipv6_hosts() {
        let v4 = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(v4.socket_addr().unwrap().to_string(), "127.0.0.1:3000");

        let v6 = ServerConfig {
            host: "::1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(v6.socket_addr().unwrap().to_string(), "[::1]:3000");
    }

    #[test]
    fn hostnames_are_not_bind_addresses() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBindAddress)
        ));
    }

    #[test]
    fn request_timeout_is_bounded() {
        let timeout = |secs| ServerConfig {
            request_timeout_secs: secs,
            ..Default::default()
        };

        assert_eq!(timeout(30).request_timeout(), Duration::from_secs(30));
        assert!(timeout(MAX_REQUEST_TIMEOUT_SECS).validate().is_ok());
        assert!(matches!(
            timeout(0).validate(),
            Err(ValidationError::InvalidTimeout)
        ));
        assert!(matches!(
            timeout(MAX_REQUEST_TIMEOUT_SECS + 1).validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn cors_is_off_without_origins() {
        assert!(ServerConfig::default().allowed_origins().unwrap().is_empty());
    }

    #[test]
    fn cors_origins_skip_blank_entries() {
        let config = ServerConfig {
            cors_origins: Some("https://calc.example.com, ,http://localhost:5173".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.allowed_origins().unwrap(),
            vec![
                HeaderValue::from_static("https://calc.example.com"),
                HeaderValue::from_static("http://localhost:5173"),
            ]
        );
    }

    #[test]
    fn cors_origin_without_scheme_fails_validation() {
        let config = ServerConfig {
            cors_origins: Some("localhost:5173".to_string()),
            ..Default::default()
        };
        match config.validate() {
            Err(ValidationError::InvalidCorsOrigin(origin)) => assert_eq!(origin, "localhost:5173"),
            other => panic!("Expected InvalidCorsOrigin, got {:?}", other),
        }
    }

    #[test]
    fn only_development_and_production_are_known_environments() {
        let production: Environment = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(production, Environment::Production);
        assert!(serde_json::from_str::<Environment>("\"staging\"").is_err());
    }
}
