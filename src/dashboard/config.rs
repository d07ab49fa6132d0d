//! Dashboard Configuration
//!
//! Server settings with localhost-first defaults.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Dashboard server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Bind address (default: 127.0.0.1)
    pub bind_addr: IpAddr,
    /// Port number (default: 8080)
    pub port: u16,
    /// Restrict CORS to `cors_origins` (otherwise any origin, GET only)
    pub cors_enabled: bool,
    /// Allowed CORS origins
    pub cors_origins: Vec<String>,
    /// Enable request logging
    pub log_requests: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            cors_enabled: true,
            cors_origins: vec![
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
            log_requests: true,
        }
    }
}

impl DashboardConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key/value source, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("DASHBOARD_BIND_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.bind_addr = parsed,
                Err(_) => tracing::warn!("Ignoring invalid DASHBOARD_BIND_ADDR '{}'", addr),
            }
        }

        if let Some(port) = lookup("DASHBOARD_PORT") {
            match port.parse() {
                Ok(parsed) => config.port = parsed,
                Err(_) => tracing::warn!("Ignoring invalid DASHBOARD_PORT '{}'", port),
            }
        }

        if let Some(val) = lookup("DASHBOARD_LOG_REQUESTS") {
            config.log_requests = is_truthy(&val);
        }

        if let Some(val) = lookup("DASHBOARD_CORS_ENABLED") {
            config.cors_enabled = is_truthy(&val);
        }

        if let Some(origins) = lookup("DASHBOARD_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        config
    }

    /// Check if bound to localhost only
    pub fn is_localhost(&self) -> bool {
        self.bind_addr.is_loopback()
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Get the base URL for this server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.socket_addr())
    }
}

fn is_truthy(val: &str) -> bool {
    val == "true" || val == "1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_localhost() {
        let config = DashboardConfig::default();
        assert!(config.is_localhost());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            ("DASHBOARD_BIND_ADDR", "0.0.0.0"),
            ("DASHBOARD_PORT", "3000"),
            ("DASHBOARD_LOG_REQUESTS", "0"),
            ("DASHBOARD_CORS_ENABLED", "false"),
            ("DASHBOARD_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ]
        .into();
        let config = DashboardConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert!(!config.is_localhost());
        assert_eq!(config.socket_addr().port(), 3000);
        assert!(!config.log_requests);
        assert!(!config.cors_enabled);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_lookup_ignores_invalid_values() {
        let config = DashboardConfig::from_lookup(|k| match k {
            "DASHBOARD_PORT" => Some("eighty".to_string()),
            "DASHBOARD_BIND_ADDR" => Some("localhost:80".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert!(config.is_localhost());
        assert!(config.cors_enabled);
    }

    #[test]
    fn test_base_url() {
        let config = DashboardConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }
}
