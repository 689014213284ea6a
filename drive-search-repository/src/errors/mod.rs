//! Error types for the drive search repository.

mod drive_error;

pub use drive_error::DriveError;
