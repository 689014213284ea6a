//! Invocation schema advertised to embedding hosts.

use serde_json::{json, Value};

/// Tool name as advertised to hosts.
pub const TOOL_NAME: &str = "gdrive_search";

/// The tool's invocation schema: name, description, and JSON input schema.
///
/// `query` is required; `pageToken` and `pageSize` are optional and map onto
/// [`crate::SearchRequest`] field for field.
pub fn tool_schema() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": "Search for files in Google Drive",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query for files and folders in Google Drive. trashed files are excluded by default. Use 'trashed = true' to include trashed files."
                },
                "pageToken": {
                    "type": "string",
                    "description": "Token for the next page of results. Use if there are more results than can fit on one page. If not provided, the first page of results will be returned. Make sure the query is the same as the one used to get the token."
                },
                "pageSize": {
                    "type": "number",
                    "description": "Number of results per page (max 100)"
                }
            },
            "required": ["query"]
        }
    })
}
