//! Command implementations: one module per subcommand.

pub mod comment;
pub mod create;
pub mod get;
pub mod list;
pub mod projects;
pub mod search;
pub mod update;

use crate::api::types::CustomFieldValue;
use crate::api::ApiError;
use crate::error::Result;

/// Parse `--field id=value` specs into custom field values.
///
/// Field ids must be numeric; the client does not resolve field names
/// against the custom-field schema.
pub(crate) fn parse_custom_fields(specs: &[String]) -> Result<Vec<CustomFieldValue>> {
    specs
        .iter()
        .map(|spec| {
            let (id, value) = spec.split_once('=').ok_or_else(|| {
                ApiError::invalid_request(format!(
                    "invalid custom field '{spec}': expected id=value"
                ))
            })?;
            let id: u32 = id.trim().parse().map_err(|_| {
                ApiError::invalid_request(format!(
                    "invalid custom field id '{id}': numeric ids are required"
                ))
            })?;
            Ok(CustomFieldValue {
                id,
                value: serde_json::Value::String(value.to_string()),
            })
        })
        .collect()
}
