//! Service configuration, read once at startup from the environment.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service settings.
///
/// Every field has a default and a `CSVWASH_*` environment override;
/// unparseable overrides fall back to the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Upper bound on an uploaded file, in bytes.
    pub max_upload_bytes: usize,
    /// Seconds a cleaned payload stays retrievable.
    pub result_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
            result_ttl_secs: 600,
        }
    }
}

impl AppConfig {
    /// Load the configuration from the environment over the defaults.
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            host: env::var("CSVWASH_HOST").unwrap_or(base.host),
            port: env_or("CSVWASH_PORT", base.port),
            max_upload_bytes: env_or("CSVWASH_MAX_UPLOAD_BYTES", base.max_upload_bytes),
            result_ttl_secs: env_or("CSVWASH_RESULT_TTL_SECS", base.result_ttl_secs),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
