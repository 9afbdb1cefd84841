//! Project and version operations.

use tracing::debug;

use super::client::RedmineClient;
use super::error::{ApiError, Result};
use super::types::{
    ProjectDetail, ProjectResponse, ProjectsResponse, Version, VersionsResponse,
};

/// Page size for project listings.
///
/// A single page is fetched without a pagination loop, so instances with
/// more than 100 visible projects are truncated.
const PROJECT_PAGE_SIZE: u32 = 100;

impl RedmineClient {
    /// List up to [`PROJECT_PAGE_SIZE`] projects visible to the API key.
    pub async fn list_projects(&self) -> Result<ProjectsResponse> {
        let params = [("limit", PROJECT_PAGE_SIZE.to_string())];
        let response: ProjectsResponse = self.get("/projects.json", &params).await?;
        debug!(
            count = response.projects.len(),
            total = response.total_count,
            "listed projects"
        );
        Ok(response)
    }

    /// Fetch full project detail by numeric id or identifier (slug).
    pub async fn get_project(&self, id_or_slug: &str) -> Result<ProjectDetail> {
        let path = format!("/projects/{id_or_slug}.json");
        let response: ProjectResponse = self.get(&path, &[]).await?;
        Ok(response.project)
    }

    /// List the versions of a project, by numeric id or identifier.
    pub async fn list_versions(&self, project: &str) -> Result<Vec<Version>> {
        let path = format!("/projects/{project}/versions.json");
        let response: VersionsResponse = self.get(&path, &[]).await?;
        Ok(response.versions)
    }

    /// Resolve a version name to its record within a project.
    ///
    /// The match is exact and case-sensitive. Returns
    /// [`ApiError::VersionNotFound`] naming the project and version when no
    /// version matches.
    pub async fn find_version_by_name(&self, project: &str, name: &str) -> Result<Version> {
        let versions = self.list_versions(project).await?;
        find_version(versions, project, name)
    }
}

/// Linear scan for an exact, case-sensitive name match.
fn find_version(versions: Vec<Version>, project: &str, name: &str) -> Result<Version> {
    versions
        .into_iter()
        .find(|version| version.name == name)
        .ok_or_else(|| ApiError::VersionNotFound {
            version: name.to_string(),
            project: project.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(id: u32, name: &str) -> Version {
        Version {
            id,
            name: name.to_string(),
            description: String::new(),
            status: "open".to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_find_version_exact_match() {
        let versions = vec![version(1, "v1.0"), version(2, "v1.0-beta")];
        let found = find_version(versions, "demo", "v1.0").unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_find_version_is_case_sensitive() {
        let versions = vec![version(1, "v1.0"), version(2, "v1.0-beta")];
        let err = find_version(versions, "demo", "V1.0").unwrap_err();
        match err {
            ApiError::VersionNotFound { version, project } => {
                assert_eq!(version, "V1.0");
                assert_eq!(project, "demo");
            }
            other => panic!("expected VersionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_find_version_does_not_prefix_match() {
        // "v1.0" must not match "v1.0-beta" when only the latter exists.
        let versions = vec![version(2, "v1.0-beta")];
        let err = find_version(versions, "demo", "v1.0").unwrap_err();
        assert!(matches!(err, ApiError::VersionNotFound { .. }));
    }

    #[test]
    fn test_find_version_empty_list() {
        let err = find_version(Vec::new(), "demo", "v1.0").unwrap_err();
        assert!(matches!(err, ApiError::VersionNotFound { .. }));
    }
}
