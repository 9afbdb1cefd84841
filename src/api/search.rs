//! Full-text search across Redmine resources.

use std::future::Future;

use tracing::debug;

use super::client::RedmineClient;
use super::error::Result;
use super::types::{SearchResponse, SearchResult};

/// Default page size for search requests.
const DEFAULT_SEARCH_PAGE_SIZE: u32 = 100;

/// Which projects a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Every project visible to the API key.
    All,
    /// Projects the user is a member of.
    MyProjects,
    /// The current project and its subprojects.
    Subprojects,
}

impl SearchScope {
    /// The wire value for the `scope` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::MyProjects => "my_projects",
            SearchScope::Subprojects => "subprojects",
        }
    }
}

/// Options for a search request.
///
/// Each resource kind is independently toggleable; [`SearchOptions::new`]
/// enables issues only, matching the common case.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// The query string.
    pub query: String,
    /// Offset of the first result to return.
    pub offset: u32,
    /// Page size; sent only when non-zero.
    pub limit: u32,
    /// Project scope of the search.
    pub scope: Option<SearchScope>,
    /// Require every query word to match.
    pub all_words: bool,
    /// Match titles only.
    pub titles_only: bool,
    /// Include issues.
    pub issues: bool,
    /// Include news entries.
    pub news: bool,
    /// Include documents.
    pub documents: bool,
    /// Include repository changesets.
    pub changesets: bool,
    /// Include wiki pages.
    pub wiki_pages: bool,
    /// Include forum messages.
    pub messages: bool,
    /// Include projects.
    pub projects: bool,
}

impl SearchOptions {
    /// Create options for an issue search with the default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            offset: 0,
            limit: DEFAULT_SEARCH_PAGE_SIZE,
            scope: None,
            all_words: false,
            titles_only: false,
            issues: true,
            news: false,
            documents: false,
            changesets: false,
            wiki_pages: false,
            messages: false,
            projects: false,
        }
    }

    /// Enable every resource kind.
    pub fn all_types(&mut self) {
        self.issues = true;
        self.news = true;
        self.documents = true;
        self.changesets = true;
        self.wiki_pages = true;
        self.messages = true;
        self.projects = true;
    }

    /// Build the query parameters for `GET /search.json`.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone())];

        if self.offset > 0 {
            params.push(("offset", self.offset.to_string()));
        }
        if self.limit > 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if let Some(scope) = self.scope {
            params.push(("scope", scope.as_str().to_string()));
        }

        let kinds: [(&'static str, bool); 7] = [
            ("issues", self.issues),
            ("news", self.news),
            ("documents", self.documents),
            ("changesets", self.changesets),
            ("wiki_pages", self.wiki_pages),
            ("messages", self.messages),
            ("projects", self.projects),
        ];
        for (name, enabled) in kinds {
            if enabled {
                params.push((name, "1".to_string()));
            }
        }

        if self.all_words {
            params.push(("all_words", "1".to_string()));
        }
        if self.titles_only {
            params.push(("titles_only", "1".to_string()));
        }

        params
    }
}

impl RedmineClient {
    /// Fetch one page of search results.
    pub async fn search(&self, opts: &SearchOptions) -> Result<SearchResponse> {
        let params = opts.query_params();
        let response: SearchResponse = self.get("/search.json", &params).await?;
        debug!(
            count = response.results.len(),
            total = response.total_count,
            "search page"
        );
        Ok(response)
    }

    /// Fetch every page of search results, advancing the offset by the page
    /// limit until a page comes back empty or the reported total is reached.
    pub async fn search_all(&self, opts: &SearchOptions) -> Result<Vec<SearchResult>> {
        collect_all_pages(opts.clone(), |page_opts| async move {
            self.search(&page_opts).await
        })
        .await
    }
}

/// Accumulate search pages until exhaustion.
///
/// Terminates when a page is empty, regardless of the total the server
/// reports, so an inconsistent total cannot make the loop fetch forever.
async fn collect_all_pages<F, Fut>(mut opts: SearchOptions, mut fetch: F) -> Result<Vec<SearchResult>>
where
    F: FnMut(SearchOptions) -> Fut,
    Fut: Future<Output = Result<SearchResponse>>,
{
    let mut results = Vec::new();
    let mut offset = opts.offset;

    loop {
        opts.offset = offset;
        let page = fetch(opts.clone()).await?;

        if page.results.is_empty() {
            break;
        }

        let fetched = page.results.len() as u32;
        results.extend(page.results);

        if offset + fetched >= page.total_count {
            break;
        }

        offset += if opts.limit > 0 { opts.limit } else { fetched };
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;

    #[test]
    fn test_default_options_search_issues_only() {
        let params = SearchOptions::new("crash").query_params();
        assert!(params.contains(&("q", "crash".to_string())));
        assert!(params.contains(&("issues", "1".to_string())));
        assert!(params.iter().all(|(key, _)| *key != "wiki_pages"));
        assert!(params.iter().all(|(key, _)| *key != "projects"));
    }

    #[test]
    fn test_all_types_enables_every_kind() {
        let mut opts = SearchOptions::new("crash");
        opts.all_types();
        let params = opts.query_params();
        for kind in [
            "issues",
            "news",
            "documents",
            "changesets",
            "wiki_pages",
            "messages",
            "projects",
        ] {
            assert!(
                params.contains(&(kind, "1".to_string())),
                "missing kind {kind}"
            );
        }
    }

    #[test]
    fn test_scope_and_match_toggles() {
        let mut opts = SearchOptions::new("crash");
        opts.scope = Some(SearchScope::MyProjects);
        opts.all_words = true;
        opts.titles_only = true;

        let params = opts.query_params();
        assert!(params.contains(&("scope", "my_projects".to_string())));
        assert!(params.contains(&("all_words", "1".to_string())));
        assert!(params.contains(&("titles_only", "1".to_string())));
    }

    #[test]
    fn test_zero_offset_and_limit_are_omitted() {
        let mut opts = SearchOptions::new("crash");
        opts.limit = 0;
        let params = opts.query_params();
        assert!(params.iter().all(|(key, _)| *key != "offset"));
        assert!(params.iter().all(|(key, _)| *key != "limit"));
    }

    fn result(id: u32) -> SearchResult {
        SearchResult {
            id,
            title: format!("Result {id}"),
            kind: "issue".to_string(),
            url: format!("https://redmine.example.com/issues/{id}"),
            description: String::new(),
            datetime: String::new(),
        }
    }

    fn page(ids: std::ops::Range<u32>, total: u32, limit: u32) -> SearchResponse {
        SearchResponse {
            results: ids.map(result).collect(),
            total_count: total,
            offset: 0,
            limit,
        }
    }

    async fn run_pages(pages: Vec<SearchResponse>, limit: u32) -> (Vec<SearchResult>, u32) {
        let queue = RefCell::new(VecDeque::from(pages));
        let calls = Cell::new(0u32);

        let mut opts = SearchOptions::new("crash");
        opts.limit = limit;

        let results = collect_all_pages(opts, |_page_opts| {
            calls.set(calls.get() + 1);
            let next = queue
                .borrow_mut()
                .pop_front()
                .expect("fetched past the final page");
            async move { Ok(next) }
        })
        .await
        .unwrap();

        (results, calls.get())
    }

    #[tokio::test]
    async fn test_collect_all_pages_accumulates_until_empty_page() {
        // Server reports an inflated total; the empty page must still stop
        // the loop.
        let pages = vec![
            page(0..3, 100, 3),
            page(3..6, 100, 3),
            page(6..6, 100, 3),
        ];

        let (results, calls) = run_pages(pages, 3).await;
        assert_eq!(results.len(), 6);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_collect_all_pages_stops_at_reported_total() {
        let pages = vec![page(0..3, 5, 3), page(3..5, 5, 3)];

        let (results, calls) = run_pages(pages, 3).await;
        assert_eq!(results.len(), 5);
        assert_eq!(calls, 2);
        assert_eq!(results[4].id, 4);
    }

    #[tokio::test]
    async fn test_collect_all_pages_single_exact_page() {
        let pages = vec![page(0..3, 3, 3)];

        let (results, calls) = run_pages(pages, 3).await;
        assert_eq!(results.len(), 3);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_collect_all_pages_empty_first_page() {
        let pages = vec![page(0..0, 0, 3)];

        let (results, calls) = run_pages(pages, 3).await;
        assert!(results.is_empty());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_collect_all_pages_advances_by_page_size_without_limit() {
        // With no explicit limit the loop steps by the size of the page the
        // server actually returned.
        let pages = vec![page(0..4, 100, 0), page(4..4, 100, 0)];

        let (results, calls) = run_pages(pages, 0).await;
        assert_eq!(results.len(), 4);
        assert_eq!(calls, 2);
    }
}
