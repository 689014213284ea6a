//! # Drive Search Tool
//!
//! The query adapter: derives an effective filter from a free-text query,
//! delegates the listing call to a Drive provider, and renders the result as
//! a text summary with pagination-token passthrough. The adapter holds no
//! state across invocations.

pub mod filter;
pub mod render;
pub mod schema;
pub mod tool;

pub use filter::derive_filter;
pub use schema::{tool_schema, TOOL_NAME};
pub use tool::{SearchRequest, SearchResponse, SearchTool};
