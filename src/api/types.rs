//! Redmine API request and response types.
//!
//! These types mirror the JSON shapes of the Redmine REST API exactly,
//! including its snake_case field names (`assigned_to`, `start_date`,
//! `done_ratio`). Read-side records keep optional fields as `Option` or
//! defaulted collections; write-side payloads skip unset fields entirely so
//! that partial updates only transmit what the caller explicitly set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A lightweight `{id, name}` reference to an associated entity.
///
/// Redmine embeds these for the project, tracker, status, priority, author
/// and assignee of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// The entity id.
    pub id: u32,
    /// The entity display name.
    pub name: String,
}

impl fmt::Display for NamedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A Redmine issue.
///
/// Returned by `GET /issues/{id}.json` and as elements of `GET /issues.json`.
/// The project, tracker, status, priority and author associations are always
/// present; assignee, dates, estimate and journals are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// The issue id.
    pub id: u32,
    /// The project the issue belongs to.
    pub project: NamedRef,
    /// The tracker (issue type).
    pub tracker: NamedRef,
    /// The workflow status.
    pub status: NamedRef,
    /// The priority.
    pub priority: NamedRef,
    /// The user who created the issue.
    pub author: NamedRef,
    /// The assignee, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<NamedRef>,
    /// The issue subject line.
    pub subject: String,
    /// The issue description.
    #[serde(default)]
    pub description: String,
    /// Start date as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Completion ratio, 0-100.
    #[serde(default)]
    pub done_ratio: u32,
    /// Estimated hours, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Custom field values attached to the issue.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    /// Creation timestamp (RFC 3339).
    pub created_on: String,
    /// Last update timestamp (RFC 3339).
    pub updated_on: String,
    /// Journal entries, present when requested with `include=journals`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub journals: Vec<Journal>,
}

/// One page of issues from `GET /issues.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuesResponse {
    /// The issues on this page.
    pub issues: Vec<Issue>,
    /// Total number of issues matching the filter.
    pub total_count: u32,
    /// Offset of the first returned issue.
    #[serde(default)]
    pub offset: u32,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: u32,
}

/// Wrapper around a single issue, as returned by the issue endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    /// The issue.
    pub issue: Issue,
}

/// A custom field value on an issue.
///
/// Redmine custom fields are dynamically typed (string, number, boolean or
/// list of strings depending on the field definition), so the value is kept
/// as an opaque JSON value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    /// The custom field id.
    pub id: u32,
    /// The custom field name.
    pub name: String,
    /// The raw value.
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A journal entry: a comment and/or a set of recorded field changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    /// The journal entry id.
    pub id: u32,
    /// The user who made the change.
    pub user: NamedRef,
    /// Free-text note, empty when the entry only records field changes.
    #[serde(default)]
    pub notes: String,
    /// Creation timestamp (RFC 3339).
    pub created_on: String,
    /// Structured field changes recorded with this entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<JournalDetail>,
}

/// One recorded field change inside a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDetail {
    /// The kind of property that changed (e.g. `attr`, `cf`).
    pub property: String,
    /// The name of the changed field.
    pub name: String,
    /// The previous value, if any.
    #[serde(default)]
    pub old_value: Option<String>,
    /// The new value, if any.
    #[serde(default)]
    pub new_value: Option<String>,
}

/// Full project detail from `GET /projects/{id}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetail {
    /// The project id.
    pub id: u32,
    /// The project display name.
    pub name: String,
    /// The project identifier (URL slug).
    pub identifier: String,
    /// The project description.
    #[serde(default)]
    pub description: String,
    /// The project status code.
    #[serde(default)]
    pub status: u32,
    /// Whether the project is public.
    #[serde(default)]
    pub is_public: bool,
    /// Trackers available in this project.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trackers: Vec<NamedRef>,
}

/// One page of projects from `GET /projects.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    /// The projects on this page.
    pub projects: Vec<ProjectDetail>,
    /// Total number of visible projects.
    pub total_count: u32,
    /// Offset of the first returned project.
    #[serde(default)]
    pub offset: u32,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: u32,
}

/// Wrapper around a single project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectResponse {
    /// The project.
    pub project: ProjectDetail,
}

/// A project version (milestone/target).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    /// The version id.
    pub id: u32,
    /// The version name.
    pub name: String,
    /// The version description.
    #[serde(default)]
    pub description: String,
    /// The version status (`open`, `locked`, `closed`).
    #[serde(default)]
    pub status: String,
    /// Due date as `YYYY-MM-DD`, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Versions of a project from `GET /projects/{id}/versions.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionsResponse {
    /// The versions, unordered.
    pub versions: Vec<Version>,
}

/// One result from the full-text search API.
///
/// The shape is uniform regardless of which resource kind matched; `kind`
/// carries the resource type tag (`issue`, `wiki-page`, `news`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The id of the matched resource.
    pub id: u32,
    /// The resource title.
    pub title: String,
    /// The resource type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Canonical URL of the resource.
    pub url: String,
    /// Text snippet around the match. May contain highlight markup.
    #[serde(default)]
    pub description: String,
    /// Timestamp of the matched resource.
    #[serde(default)]
    pub datetime: String,
}

/// One page of search results from `GET /search.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The results on this page.
    pub results: Vec<SearchResult>,
    /// Total number of matches reported by the server.
    pub total_count: u32,
    /// Offset of the first returned result.
    #[serde(default)]
    pub offset: u32,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: u32,
}

/// A custom field value in a write payload: `{id, value}` pairs only.
///
/// The client does not resolve field names to ids; callers must supply
/// numeric ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldValue {
    /// The custom field id.
    pub id: u32,
    /// The value to set.
    pub value: serde_json::Value,
}

/// Payload for creating an issue via `POST /issues.json`.
///
/// `project_id` and `subject` are required; everything else is optional and
/// omitted from the request when unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueCreate {
    /// The numeric id of the target project (resolve slugs beforehand).
    pub project_id: u32,
    /// The issue subject line.
    pub subject: String,
    /// The issue description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The tracker id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<u32>,
    /// The initial status id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,
    /// The priority id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u32>,
    /// The assignee user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u32>,
    /// Start date as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Custom field values to set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldValue>,
}

/// Payload for updating an issue via `PUT /issues/{id}.json`.
///
/// Every field is optional; only fields explicitly set are transmitted.
/// Setting `notes` alongside other changes makes Redmine record both as a
/// single journal entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdate {
    /// New subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,
    /// New priority id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u32>,
    /// New assignee user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u32>,
    /// New target version id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version_id: Option<u32>,
    /// New completion ratio, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_ratio: Option<u32>,
    /// New start date as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// New due date as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// A note to record as a journal entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Custom field values to set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldValue>,
}

impl IssueUpdate {
    /// Check whether no field of the update has been set.
    ///
    /// Used by [`crate::api::RedmineClient::update_issue`] to reject no-op
    /// updates before any HTTP call.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.description.is_none()
            && self.status_id.is_none()
            && self.priority_id.is_none()
            && self.assigned_to_id.is_none()
            && self.fixed_version_id.is_none()
            && self.done_ratio.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.notes.is_none()
            && self.custom_fields.is_empty()
    }
}

/// Request envelope for `POST /issues.json`.
#[derive(Debug, Serialize)]
pub struct IssueCreateRequest {
    /// The payload under the `issue` key.
    pub issue: IssueCreate,
}

/// Request envelope for `PUT /issues/{id}.json`.
#[derive(Debug, Serialize)]
pub struct IssueUpdateRequest {
    /// The payload under the `issue` key.
    pub issue: IssueUpdate,
}
