//! Request and response types for the `files.list` operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Number of results per page when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Parameters for a single listing call against the backend.
///
/// The `query` is the effective filter in the backend's query language, not
/// the user's raw text. The backend caps `page_size` at 100; no clamping is
/// done locally.
#[derive(Debug, Clone)]
pub struct ListFilesRequest {
    /// Filter query, in the backend's query language.
    pub query: String,
    /// Results per page.
    pub page_size: i32,
    /// Opaque cursor from a prior page, valid only with the same filter.
    pub page_token: Option<String>,
}

impl ListFilesRequest {
    /// Create a listing request with the default page size and no cursor.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: DEFAULT_PAGE_SIZE,
            page_token: None,
        }
    }
}

/// A single file summary as projected by the listing call.
///
/// Only the fields named in the fixed projection are populated; everything is
/// read-only and discarded after rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Backend-assigned file identifier.
    pub id: String,
    /// File display name.
    pub name: String,
    /// MIME type, e.g. `application/pdf`.
    pub mime_type: String,
    /// Last modification time, RFC 3339 on the wire.
    #[serde(default)]
    pub modified_time: Option<DateTime<Utc>>,
    /// File size in bytes. Absent for folders and some native document types.
    #[serde(default, deserialize_with = "int64_string")]
    pub size: Option<i64>,
}

/// One page of listing results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListPage {
    /// Matching files, ordered by last-modified descending.
    #[serde(default)]
    pub files: Vec<DriveFile>,
    /// Cursor for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// The backend serializes int64 fields as decimal strings.
fn int64_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
    }
}
