//! Redmine API client transport.
//!
//! This module performs single HTTP request/response cycles against the
//! configured base URL: it joins paths and query strings, attaches the API
//! key header, serializes request bodies to JSON and classifies HTTP-level
//! failures into typed errors. No retries and no backoff - every failure is
//! surfaced to the caller immediately.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::error::{ApiError, Result};

/// Request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the Redmine API key.
const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// The Redmine API client.
///
/// Holds the normalized base URL, the API key and a reusable HTTP client.
/// All resource operations (issues, projects, versions, search) are
/// implemented on this type in their own modules.
#[derive(Debug)]
pub struct RedmineClient {
    /// The HTTP client.
    http: Client,
    /// The base URL of the Redmine instance, without a trailing slash.
    base_url: String,
    /// The static API key sent with every request.
    api_key: String,
}

impl RedmineClient {
    /// Create a new client for a Redmine instance.
    ///
    /// The base URL is normalized (trailing slashes stripped) and validated
    /// before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the URL cannot be parsed or
    /// does not use http/https, and [`ApiError::Network`] if the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url);

        let parsed = Url::parse(&base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(base_url.clone()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL of the Redmine instance.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full request URL for a resource path and query parameters.
    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&encode_query(params));
        }
        url
    }

    /// Perform a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path, params);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let body = read_body(response, &url).await?;
        decode(&body)
    }

    /// Perform a POST request with a JSON body and decode the response.
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path, &[]);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let body = read_body(response, &url).await?;
        decode(&body)
    }

    /// Perform a PUT request with a JSON body, discarding the response body.
    ///
    /// Redmine answers updates with `204 No Content`, so there is nothing to
    /// decode on success.
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path, &[]);
        debug!(%url, "PUT");

        let response = self
            .http
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        read_body(response, &url).await?;
        Ok(())
    }
}

/// Read the response body and classify HTTP-level failures.
async fn read_body(response: Response, url: &str) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    classify_response(status, body, url)
}

/// Classify a response into a typed error, or return the raw body.
///
/// Checked in precedence order: 401, 404, HTML body, any other status >= 400.
/// The HTML check runs before the generic status check because Redmine error
/// pages carry non-JSON bodies that would otherwise be reported as opaque
/// status failures.
fn classify_response(status: StatusCode, body: String, url: &str) -> Result<String> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized {
            url: url.to_string(),
        });
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound {
            url: url.to_string(),
        });
    }

    if body.trim_start().starts_with('<') {
        return Err(ApiError::HtmlResponse {
            url: url.to_string(),
        });
    }

    if status.as_u16() >= 400 {
        return Err(ApiError::ApiFailure {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Decode a JSON response body into the caller-specified shape.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Percent-encode query parameters into a query string.
fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
