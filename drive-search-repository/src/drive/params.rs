//! Query-parameter builders for the `files.list` call.
//!
//! The scope, ordering, and field projection are fixed; only the filter,
//! page size, and page cursor vary per request.

use crate::types::ListFilesRequest;

/// Field projection requested from the backend: only what rendering needs,
/// plus the next-page cursor.
pub const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, modifiedTime, size)";

/// Sort order: most recently modified first.
pub const ORDER_BY: &str = "modifiedTime desc";

/// Build the full query-parameter set for a listing request.
///
/// The corpora/spaces/shared-drive parameters make the search span the user's
/// drive and all shared drives they can access. `pageToken` is only emitted
/// when the request carries a cursor.
pub fn list_params(request: &ListFilesRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", request.query.clone()),
        ("pageSize", request.page_size.to_string()),
        ("corpora", "allDrives".to_string()),
        ("spaces", "drive".to_string()),
        ("supportsAllDrives", "true".to_string()),
        ("includeItemsFromAllDrives", "true".to_string()),
        ("orderBy", ORDER_BY.to_string()),
        ("fields", LIST_FIELDS.to_string()),
    ];

    if let Some(token) = &request.page_token {
        params.push(("pageToken", token.clone()));
    }

    params
}
