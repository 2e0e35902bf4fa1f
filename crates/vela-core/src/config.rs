//! Application configuration

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path the shell navigates to on startup
    pub start_path: String,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Config {
    /// Fallback filter built from `log_filter`
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: "/".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_directive() {
        let config = Config {
            log_filter: "vela_navigation=debug".to_string(),
            ..Default::default()
        };
        assert_eq!(config.env_filter().to_string(), "vela_navigation=debug");

        assert_eq!(Config::default().env_filter().to_string(), "info");
    }
}
