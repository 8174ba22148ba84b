use serde::Deserialize;

use crate::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Top-level configuration settings for the client.
///
/// Includes the API credentials and the logging level.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub log: LogSettings,
}

/// Configuration settings for the API.
///
/// `token` identifies the sending application, `user` is the default recipient key.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub token: String,
    pub user: String,
    /// Request timeout, in seconds.
    pub timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub api: Option<PartialApiSettings>,
    pub log: Option<PartialLogSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialApiSettings {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub user: Option<String>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Credentials default to empty and must come from a file or the environment.
impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                token: String::new(),
                user: String::new(),
                timeout: DEFAULT_TIMEOUT.as_secs(),
            },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
