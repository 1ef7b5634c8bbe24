use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub auth: AuthConfig,
    pub store: StoreConfig,
    pub charts: ChartConfig,
    pub logging: LoggingConfig,
}

/// Mock-authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Artificial delay applied to login/register round-trips, in milliseconds.
    pub network_delay_ms: u64,
}

/// Persisted-mirror configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON file holding the serialized session.
    pub path: PathBuf,
}

/// Chart registry configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Data type selected at startup.
    pub default_data_type: String,
    /// Fixed RNG seed for reproducible datasets. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let auth = AuthConfig {
            network_delay_ms: env::var("AUTH_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
        };

        let store = StoreConfig {
            path: PathBuf::from(
                env::var("SESSION_STORE_PATH").unwrap_or_else(|_| "./data/session.json".to_string()),
            ),
        };

        let charts = ChartConfig {
            default_data_type: env::var("DEFAULT_DATA_TYPE").unwrap_or_else(|_| "sales".to_string()),
            seed: match env::var("CHART_SEED") {
                Ok(s) => Some(s.parse().map_err(|_| AppError::Config {
                    message: format!("CHART_SEED must be an unsigned integer, got '{}'", s),
                })?),
                Err(_) => None,
            },
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(Config {
            auth,
            store,
            charts,
            logging,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            store: StoreConfig::default(),
            charts: ChartConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            network_delay_ms: 500,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/session.json"),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_data_type: "sales".to_string(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.auth.network_delay_ms, 500);
        assert_eq!(config.store.path, PathBuf::from("./data/session.json"));
        assert_eq!(config.charts.default_data_type, "sales");
        assert!(config.charts.seed.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
