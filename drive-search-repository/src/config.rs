//! Configuration types for the Drive API client.

/// Configuration for the Drive API client.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    /// Base URL of the Drive API, e.g. "https://www.googleapis.com".
    pub base_url: String,
    /// OAuth bearer token attached to every request. Acquisition and refresh
    /// happen outside this crate.
    pub access_token: String,
}

impl DriveConfig {
    /// Create a config from a base URL and bearer token.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }
}
