//! Dependency initialization and wiring for the search CLI.

use std::env;
use tracing::info;

use crate::CliError;
use drive_search_repository::{DriveApiClient, DriveConfig};
use drive_search_tool::SearchTool;

/// Default Drive API base URL.
const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured search tool ready to run.
    pub tool: SearchTool,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GDRIVE_ACCESS_TOKEN`: OAuth bearer token for the Drive API (required)
    /// - `GDRIVE_API_BASE_URL`: Drive API base URL (default: https://www.googleapis.com)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(CliError)` - If initialization fails
    pub fn new() -> Result<Self, CliError> {
        let access_token = env::var("GDRIVE_ACCESS_TOKEN")
            .map_err(|_| CliError::config("GDRIVE_ACCESS_TOKEN is not set"))?;
        let base_url =
            env::var("GDRIVE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        info!(base_url = %base_url, "Initializing dependencies");

        let client = DriveApiClient::new(DriveConfig::new(base_url, access_token))?;

        let tool = SearchTool::new(Box::new(client));

        Ok(Self { tool })
    }
}
