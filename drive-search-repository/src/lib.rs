//! # Drive Search Repository
//!
//! This crate provides traits and implementations for talking to the Google
//! Drive file search backend. It includes definitions for errors, the
//! provider interface, and a concrete HTTP implementation of the `files.list`
//! operation.

pub mod config;
pub mod drive;
pub mod errors;
pub mod interfaces;
pub mod types;

pub use config::DriveConfig;
pub use drive::DriveApiClient;
pub use errors::DriveError;
pub use interfaces::DriveProvider;
pub use types::{DriveFile, FileListPage, ListFilesRequest, DEFAULT_PAGE_SIZE};
