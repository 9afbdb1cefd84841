//! Issue operations: list, get, create, update and comment.

use tracing::debug;

use super::client::RedmineClient;
use super::error::{ApiError, Result};
use super::types::{
    Issue, IssueCreate, IssueCreateRequest, IssueResponse, IssueUpdate, IssueUpdateRequest,
    IssuesResponse,
};

/// Default page size for issue listings when the filter does not set one.
const DEFAULT_PAGE_SIZE: u32 = 25;

/// Filter for listing issues.
///
/// Only fields that are set become query parameters; an empty filter requests
/// the first page of 25 issues with no other constraints.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// Restrict to a project, by numeric id or identifier.
    pub project_id: Option<String>,
    /// Restrict to a status id.
    pub status_id: Option<String>,
    /// Restrict to an assignee: a numeric user id or the literal `me`.
    pub assigned_to: Option<String>,
    /// Page size; defaults to 25 when unset.
    pub limit: Option<u32>,
    /// Offset of the first issue to return.
    pub offset: Option<u32>,
}

impl IssueFilter {
    /// Build the query parameters for `GET /issues.json`.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(project) = &self.project_id {
            params.push(("project_id", project.clone()));
        }
        if let Some(status) = &self.status_id {
            params.push(("status_id", status.clone()));
        }
        if let Some(assignee) = &self.assigned_to {
            params.push(("assigned_to_id", assignee.clone()));
        }

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        params.push(("limit", limit.to_string()));

        if let Some(offset) = self.offset {
            if offset > 0 {
                params.push(("offset", offset.to_string()));
            }
        }

        params
    }
}

impl RedmineClient {
    /// List issues matching a filter.
    ///
    /// Returns one page of issues plus total/offset/limit metadata.
    pub async fn list_issues(&self, filter: &IssueFilter) -> Result<IssuesResponse> {
        let params = filter.query_params();
        let response: IssuesResponse = self.get("/issues.json", &params).await?;
        debug!(
            count = response.issues.len(),
            total = response.total_count,
            "listed issues"
        );
        Ok(response)
    }

    /// Fetch a single issue by id.
    ///
    /// When `include_journals` is set, the comment history is requested
    /// inline via the `include` query parameter.
    pub async fn get_issue(&self, id: u32, include_journals: bool) -> Result<Issue> {
        let path = format!("/issues/{id}.json");
        let params: Vec<(&str, String)> = if include_journals {
            vec![("include", "journals".to_string())]
        } else {
            Vec::new()
        };

        let response: IssueResponse = self.get(&path, &params).await?;
        Ok(response.issue)
    }

    /// Create an issue and return it, including its assigned id.
    ///
    /// The payload must carry a resolved numeric project id and a non-empty
    /// subject; anything else the server rejects surfaces as a generic API
    /// error.
    pub async fn create_issue(&self, issue: IssueCreate) -> Result<Issue> {
        if issue.subject.trim().is_empty() {
            return Err(ApiError::invalid_request("issue subject cannot be empty"));
        }
        if issue.project_id == 0 {
            return Err(ApiError::invalid_request(
                "issue project is not set; resolve the project id first",
            ));
        }

        let request = IssueCreateRequest { issue };
        let response: IssueResponse = self.post("/issues.json", &request).await?;
        debug!(id = response.issue.id, "created issue");
        Ok(response.issue)
    }

    /// Update an issue with the fields set in the payload.
    ///
    /// Rejects payloads with no fields set before any HTTP call is made.
    pub async fn update_issue(&self, id: u32, update: IssueUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(ApiError::invalid_request("no updates specified"));
        }

        let path = format!("/issues/{id}.json");
        let request = IssueUpdateRequest { issue: update };
        self.put(&path, &request).await?;
        debug!(id, "updated issue");
        Ok(())
    }

    /// Add a comment to an issue.
    ///
    /// This is an update with only `notes` set; the text must be non-empty.
    pub async fn add_comment(&self, id: u32, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ApiError::invalid_request("comment cannot be empty"));
        }

        let update = IssueUpdate {
            notes: Some(text.to_string()),
            ..Default::default()
        };
        self.update_issue(id, update).await
    }
}
