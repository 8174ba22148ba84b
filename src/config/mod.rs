//! The `config` module loads the client settings.
//!
//! Values come, in increasing order of precedence, from the built-in defaults,
//! an optional `config/pushover` file (any format the `config` crate reads)
//! and `PUSHOVER_`-prefixed environment variables such as `PUSHOVER_API_TOKEN`.
//! A `.env` file in the working directory is loaded into the environment first.

mod settings;

use config::{Config, ConfigError, Environment, File};

pub use settings::{ApiSettings, LogSettings, PartialSettings, Settings};

/// File looked up by [`load_config`], extension excluded.
pub const DEFAULT_CONFIG_FILE: &str = "config/pushover";

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(DEFAULT_CONFIG_FILE)
}

/// Same as [`load_config`] with an explicit file name. The file is optional.
pub fn load_config_from(file: &str) -> Result<Settings, ConfigError> {
    let _ = dotenvy::dotenv();

    let builder = Config::builder()
        .add_source(File::with_name(file).required(false))
        // values stay strings so keys like "0123..." keep their leading zeros
        .add_source(Environment::with_prefix("PUSHOVER").separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(merge(partial, Settings::default()))
}

fn merge(partial: PartialSettings, default: Settings) -> Settings {
    let api = partial.api;
    let log = partial.log;

    Settings {
        api: ApiSettings {
            endpoint: api
                .as_ref()
                .and_then(|a| a.endpoint.clone())
                .unwrap_or(default.api.endpoint),
            token: api
                .as_ref()
                .and_then(|a| a.token.clone())
                .unwrap_or(default.api.token),
            user: api
                .as_ref()
                .and_then(|a| a.user.clone())
                .unwrap_or(default.api.user),
            timeout: api
                .as_ref()
                .and_then(|a| a.timeout)
                .unwrap_or(default.api.timeout),
        },
        log: LogSettings {
            level: log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
    }
}
