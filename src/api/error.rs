//! API error types for the Redmine client.

use thiserror::Error;

/// Errors that can occur when interacting with the Redmine API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{0}': set REDMINE_URL to a full URL including http:// or https://")]
    InvalidBaseUrl(String),

    /// Authentication failed - invalid or missing API key.
    #[error("authentication failed: invalid API key or unauthorized access (URL: {url})")]
    Unauthorized {
        /// The URL that was requested.
        url: String,
    },

    /// The requested resource does not exist.
    #[error("not found: the requested resource does not exist (URL: {url})")]
    NotFound {
        /// The URL that was requested.
        url: String,
    },

    /// The server answered with HTML instead of JSON.
    ///
    /// Redmine does this when the base URL points at a login page or an
    /// error page, typically because the scheme or host is wrong.
    #[error(
        "invalid response: expected JSON but got HTML; check that the base URL \
         is correct and includes the protocol (URL: {url})"
    )]
    HtmlResponse {
        /// The URL that was requested.
        url: String,
    },

    /// Any other HTTP error status, reported with the raw body for diagnosis.
    #[error("API error (status {status}): {body}")]
    ApiFailure {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// Network or HTTP transport error (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response body that could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    InvalidResponse(String),

    /// Caller-side validation failure, detected before any HTTP call.
    #[error("{0}")]
    InvalidRequest(String),

    /// A version name did not match any version of the project.
    #[error("version '{version}' not found in project '{project}'")]
    VersionNotFound {
        /// The version name that was searched for.
        version: String,
        /// The project id or identifier whose versions were listed.
        project: String,
    },
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create a caller-side validation error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        ApiError::InvalidRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_display_includes_url() {
        let err = ApiError::Unauthorized {
            url: "https://redmine.example.com/issues.json".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("authentication failed"));
        assert!(msg.contains("https://redmine.example.com/issues.json"));
    }

    #[test]
    fn test_not_found_display_includes_url() {
        let err = ApiError::NotFound {
            url: "https://redmine.example.com/issues/999.json".to_string(),
        };
        assert!(err.to_string().contains("/issues/999.json"));
    }

    #[test]
    fn test_html_response_hints_at_protocol() {
        let err = ApiError::HtmlResponse {
            url: "http://redmine.example.com/search.json".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected JSON but got HTML"));
        assert!(msg.contains("protocol"));
    }

    #[test]
    fn test_api_failure_display_includes_status_and_body() {
        let err = ApiError::ApiFailure {
            status: 422,
            body: r#"{"errors":["Subject cannot be blank"]}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("Subject cannot be blank"));
    }

    #[test]
    fn test_version_not_found_names_both_sides() {
        let err = ApiError::VersionNotFound {
            version: "v1.0".to_string(),
            project: "demo".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("v1.0"));
        assert!(msg.contains("demo"));
    }
}
