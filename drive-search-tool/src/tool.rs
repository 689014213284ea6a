//! The search tool: request in, rendered response out.

use tracing::{debug, error};

use drive_search_repository::{DriveError, DriveProvider, ListFilesRequest, DEFAULT_PAGE_SIZE};

use crate::filter::derive_filter;
use crate::render::render_page;

/// A single search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text query; may embed backend query-language syntax.
    pub query: String,
    /// Opaque cursor from a prior response. Only valid paired with the same
    /// query that produced it.
    pub page_token: Option<String>,
    /// Results per page. Defaults to 10; the backend caps at 100.
    pub page_size: Option<i32>,
}

impl SearchRequest {
    /// Create a first-page request with the default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_token: None,
            page_size: None,
        }
    }
}

/// The rendered outcome of a search invocation.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Human-readable result text, or the backend's error description.
    pub text: String,
    /// True when the backend call failed.
    pub is_error: bool,
}

/// The query adapter.
///
/// Holds no state across invocations; every response is derived from its
/// request and the backend's live answer. Concurrent calls are independent,
/// so one tool instance may be shared freely.
pub struct SearchTool {
    provider: Box<dyn DriveProvider>,
}

impl SearchTool {
    /// Create a new tool over the given backend provider.
    pub fn new(provider: Box<dyn DriveProvider>) -> Self {
        Self { provider }
    }

    /// Run a search, capturing any backend failure into the response.
    ///
    /// Empty result sets are success. Any backend error (auth, quota,
    /// malformed query, network) becomes an error-flagged response carrying
    /// the error's description; nothing is retried locally.
    pub async fn call(&self, request: SearchRequest) -> SearchResponse {
        match self.search(&request).await {
            Ok(text) => SearchResponse {
                text,
                is_error: false,
            },
            Err(e) => {
                error!(error = %e, "Search failed");
                SearchResponse {
                    text: e.to_string(),
                    is_error: true,
                }
            }
        }
    }

    /// Derive the effective filter, delegate the listing call, and render the
    /// resulting page.
    pub async fn search(&self, request: &SearchRequest) -> Result<String, DriveError> {
        let filter = derive_filter(&request.query);

        let list_request = ListFilesRequest {
            query: filter.clone(),
            page_size: request.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            page_token: request.page_token.clone(),
        };

        debug!(
            filter = %filter,
            page_size = list_request.page_size,
            "Dispatching listing call"
        );

        let page = self.provider.list_files(&list_request).await?;

        Ok(render_page(&page, &filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use drive_search_repository::{DriveFile, FileListPage};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock provider for testing.
    struct MockProvider {
        requests: Arc<Mutex<Vec<ListFilesRequest>>>,
        page: FileListPage,
        should_fail: bool,
    }

    impl MockProvider {
        fn new(page: FileListPage) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                page,
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                page: FileListPage::default(),
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl DriveProvider for MockProvider {
        async fn list_files(
            &self,
            request: &ListFilesRequest,
        ) -> Result<FileListPage, DriveError> {
            if self.should_fail {
                return Err(DriveError::api(403, "Rate limit exceeded"));
            }
            self.requests.lock().await.push(request.clone());
            Ok(self.page.clone())
        }
    }

    fn test_file(id: &str, name: &str, mime_type: &str) -> DriveFile {
        DriveFile {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            modified_time: None,
            size: Some(1024),
        }
    }

    #[tokio::test]
    async fn test_filter_and_default_page_size_reach_provider() {
        let provider = MockProvider::new(FileListPage::default());
        let requests = provider.requests.clone();
        let tool = SearchTool::new(Box::new(provider));

        tool.call(SearchRequest::new("report")).await;

        let seen = requests.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].query, "(report) and trashed = false");
        assert_eq!(seen[0].page_size, 10);
        assert!(seen[0].page_token.is_none());
    }

    #[tokio::test]
    async fn test_page_token_and_size_pass_through() {
        let provider = MockProvider::new(FileListPage::default());
        let requests = provider.requests.clone();
        let tool = SearchTool::new(Box::new(provider));

        let request = SearchRequest {
            query: "report".to_string(),
            page_token: Some("tok-9".to_string()),
            page_size: Some(50),
        };
        tool.call(request).await;

        let seen = requests.lock().await;
        assert_eq!(seen[0].page_token.as_deref(), Some("tok-9"));
        assert_eq!(seen[0].page_size, 50);
    }

    #[tokio::test]
    async fn test_trash_opt_in_query_reaches_provider_verbatim() {
        let provider = MockProvider::new(FileListPage::default());
        let requests = provider.requests.clone();
        let tool = SearchTool::new(Box::new(provider));

        tool.call(SearchRequest::new("trashed = true")).await;

        let seen = requests.lock().await;
        assert_eq!(seen[0].query, "trashed = true");
    }

    #[tokio::test]
    async fn test_two_file_response_rendering() {
        let page = FileListPage {
            files: vec![
                test_file("id1", "Report.pdf", "application/pdf"),
                test_file("id2", "Report2.pdf", "application/pdf"),
            ],
            next_page_token: None,
        };
        let tool = SearchTool::new(Box::new(MockProvider::new(page)));

        let response = tool.call(SearchRequest::new("report")).await;

        assert!(!response.is_error);
        assert_eq!(
            response.text,
            "Found 2 files:\nid1 Report.pdf (application/pdf)\nid2 Report2.pdf (application/pdf)\n\nSearch query: '(report) and trashed = false'"
        );
    }

    #[tokio::test]
    async fn test_empty_result_is_success() {
        let tool = SearchTool::new(Box::new(MockProvider::new(FileListPage::default())));

        let response = tool.call(SearchRequest::new("trashed = true")).await;

        assert!(!response.is_error);
        assert!(response.text.starts_with("Found 0 files:"));
    }

    #[tokio::test]
    async fn test_cursor_echoed_in_next_page_instruction() {
        let page = FileListPage {
            files: vec![test_file("id1", "a.txt", "text/plain")],
            next_page_token: Some("cursor-abc".to_string()),
        };
        let tool = SearchTool::new(Box::new(MockProvider::new(page)));

        let response = tool.call(SearchRequest::new("a")).await;

        assert!(response.text.contains("pageToken: 'cursor-abc'"));
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_error_response() {
        let tool = SearchTool::new(Box::new(MockProvider::failing()));

        let response = tool.call(SearchRequest::new("report")).await;

        assert!(response.is_error);
        assert!(response.text.contains("Rate limit exceeded"));
        assert!(response.text.contains("403"));
    }
}
