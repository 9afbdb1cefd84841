//! Configuration resolution for the Redmine connection.
//!
//! The base URL and API key come from command-line flags or environment
//! variables, with flags taking precedence. Missing either is a fatal
//! configuration error naming what to set.

use thiserror::Error;

/// Environment variable holding the Redmine base URL.
pub const URL_ENV_VAR: &str = "REDMINE_URL";

/// Environment variable holding the Redmine API key.
pub const API_KEY_ENV_VAR: &str = "REDMINE_API_KEY";

/// Errors that can occur while resolving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither the `--url` flag nor the environment variable is set.
    #[error("Redmine URL is not set: set the {URL_ENV_VAR} environment variable or use --url")]
    MissingUrl,

    /// Neither the `--key` flag nor the environment variable is set.
    #[error("Redmine API key is not set: set the {API_KEY_ENV_VAR} environment variable or use --key")]
    MissingApiKey,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Resolved connection settings for a Redmine instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// The Redmine base URL.
    pub base_url: String,
    /// The static API key.
    pub api_key: String,
}

/// Resolve the configuration from flags and environment variables.
///
/// Flags win over environment variables. Empty values count as unset.
pub fn load(url_flag: Option<&str>, key_flag: Option<&str>) -> Result<Config> {
    let base_url = resolve(url_flag, URL_ENV_VAR).ok_or(ConfigError::MissingUrl)?;
    let api_key = resolve(key_flag, API_KEY_ENV_VAR).ok_or(ConfigError::MissingApiKey)?;

    Ok(Config { base_url, api_key })
}

/// Pick the flag value if set, otherwise fall back to the environment.
fn resolve(flag: Option<&str>, env_var: &str) -> Option<String> {
    match flag {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => std::env::var(env_var).ok().filter(|value| !value.is_empty()),
    }
}
