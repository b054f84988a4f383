//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, Registry};

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level:  String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:  default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// `RUST_LOG` overrides the level; `MEMBER_SEARCH_LOG_FORMAT` overrides
    /// the format.
    pub fn from_env(level: &str, format: &str) -> Self {
        Self {
            level:  std::env::var("RUST_LOG")
                .ok()
                .unwrap_or_else(|| level.to_string()),
            format: std::env::var("MEMBER_SEARCH_LOG_FORMAT")
                .ok()
                .unwrap_or_else(|| format.to_string()),
        }
    }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let level: LevelFilter = self.level.parse().unwrap_or(LevelFilter::INFO);

        match self.format.as_str() {
            "pretty" => Box::new(Registry::default().with(level).with(fmt::layer().pretty())),
            "compact" => Box::new(Registry::default().with(level).with(fmt::layer().compact())),
            _ => Box::new(Registry::default().with(level).with(fmt::layer().json())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
    }

    #[test]
    fn test_build_all_formats() {
        for format in ["json", "pretty", "compact", "unknown"] {
            let config = LoggingConfig {
                level:  "debug".to_string(),
                format: format.to_string(),
            };
            let _ = config.build();
        }
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        let config = LoggingConfig {
            level:  "chatty".to_string(),
            format: "json".to_string(),
        };
        // Should not panic; the fallback level is applied inside build()
        let _ = config.build();
    }
}
