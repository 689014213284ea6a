//! Drive provider trait definition.

use async_trait::async_trait;

use crate::errors::DriveError;
use crate::types::{FileListPage, ListFilesRequest};

/// Abstracts the Drive file-listing backend.
///
/// Implementations are injected into the search tool to enable dependency
/// injection and easy testing with mock implementations. The trait carries a
/// single operation because the adapter consumes a single backend operation:
/// list files matching a filter, scoped to all accessible shared drives,
/// sorted by modification time descending, projected to a fixed field set,
/// paginated by opaque cursor.
///
/// The backend is assumed to provide authentication enforcement, transport
/// security, rate limiting, and cursor validity tied to the originating
/// filter; implementations do not duplicate any of that.
#[async_trait]
pub trait DriveProvider: Send + Sync {
    /// List one page of files matching the request's filter.
    ///
    /// # Arguments
    ///
    /// * `request` - Filter query, page size, and optional page cursor
    ///
    /// # Returns
    ///
    /// * `Ok(FileListPage)` - Matching files plus the next-page cursor, if any
    /// * `Err(DriveError)` - If the backend call fails for any reason
    async fn list_files(&self, request: &ListFilesRequest) -> Result<FileListPage, DriveError>;
}
