//! Interface definitions for the Drive backend.
//!
//! This module defines the abstract `DriveProvider` trait that allows for
//! dependency injection and swappable backend implementations.

mod drive_provider;

pub use drive_provider::DriveProvider;
