//! Redmine API client and types.
//!
//! This module provides the interface for communicating with the Redmine
//! REST API: the HTTP transport, the wire-format records and one operation
//! per resource capability.

mod client;
pub mod error;
mod issues;
mod projects;
mod search;
pub mod types;

pub use client::RedmineClient;
pub use error::ApiError;
pub use issues::IssueFilter;
pub use search::{SearchOptions, SearchScope};
