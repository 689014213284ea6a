//! Drive API client implementation.
//!
//! This module provides the concrete implementation of `DriveProvider` using
//! reqwest against the Drive v3 REST API. Timeout and connection semantics
//! are the HTTP client's defaults; nothing is retried here.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};
use url::Url;

use crate::config::DriveConfig;
use crate::drive::params::list_params;
use crate::errors::DriveError;
use crate::interfaces::DriveProvider;
use crate::types::{FileListPage, ListFilesRequest};

/// Path of the listing endpoint, relative to the configured base URL.
const FILES_PATH: &str = "drive/v3/files";

/// Drive API client.
///
/// # Example
///
/// ```ignore
/// use drive_search_repository::{DriveApiClient, DriveConfig, ListFilesRequest};
///
/// let config = DriveConfig::new("https://www.googleapis.com", token);
/// let client = DriveApiClient::new(config)?;
/// let page = client.list_files(&ListFilesRequest::new("trashed = false")).await?;
/// ```
pub struct DriveApiClient {
    http: reqwest::Client,
    config: DriveConfig,
    files_url: Url,
}

impl DriveApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(DriveApiClient)` - A new client instance
    /// * `Err(DriveError::ConfigError)` - If the base URL is invalid or the
    ///   token is empty
    pub fn new(config: DriveConfig) -> Result<Self, DriveError> {
        if config.access_token.is_empty() {
            return Err(DriveError::config("access token is empty"));
        }

        let base = Url::parse(&config.base_url)
            .map_err(|e| DriveError::config(format!("Invalid base URL: {}", e)))?;
        let files_url = base
            .join(FILES_PATH)
            .map_err(|e| DriveError::config(format!("Invalid base URL: {}", e)))?;

        info!(base_url = %config.base_url, "Created Drive API client");

        Ok(Self {
            http: reqwest::Client::new(),
            config,
            files_url,
        })
    }
}

#[async_trait]
impl DriveProvider for DriveApiClient {
    /// List one page of files matching the request's filter.
    ///
    /// Issues `GET {base}/drive/v3/files` with the fixed scope, ordering, and
    /// field projection from [`list_params`]. Non-success statuses are mapped
    /// to `DriveError::ApiError` carrying the backend's error message when
    /// the body is parseable, the raw body otherwise.
    async fn list_files(&self, request: &ListFilesRequest) -> Result<FileListPage, DriveError> {
        debug!(
            query = %request.query,
            page_size = request.page_size,
            has_token = request.page_token.is_some(),
            "Listing files"
        );

        let response = self
            .http
            .get(self.files_url.clone())
            .bearer_auth(&self.config.access_token)
            .query(&list_params(request))
            .send()
            .await
            .map_err(|e| DriveError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_error_message(&body).unwrap_or(body);
            error!(status = %status, message = %message, "files.list request failed");
            return Err(DriveError::api(status.as_u16(), message));
        }

        let page = response
            .json::<FileListPage>()
            .await
            .map_err(|e| DriveError::decode(e.to_string()))?;

        debug!(
            files = page.files.len(),
            has_next = page.next_page_token.is_some(),
            "files.list succeeded"
        );

        Ok(page)
    }
}

/// Standard Drive error envelope: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pull the human-readable message out of a Drive error body, if it has the
/// standard shape.
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.error.message)
}
