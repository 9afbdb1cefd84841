//! Centralized error types for rd.
//!
//! This module aggregates the error types of the configuration and API
//! layers into one application error, with optional follow-up hints for the
//! failures a user can act on.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (stdout, pipes).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure when rendering output.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get a suggested action for the user, if the failure has one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Api(ApiError::Unauthorized { .. }) => {
                Some("Find your API key under 'My account' in the Redmine web interface.")
            }
            AppError::Api(ApiError::HtmlResponse { .. })
            | AppError::Api(ApiError::InvalidBaseUrl(_)) => {
                Some("REDMINE_URL must include the scheme and host, e.g. https://redmine.example.com")
            }
            AppError::Config(_) => Some("Both REDMINE_URL and REDMINE_API_KEY must be set."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
