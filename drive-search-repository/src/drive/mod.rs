//! Google Drive HTTP implementation of the provider interface.

mod client;
mod params;

pub use client::DriveApiClient;
pub use params::{list_params, LIST_FIELDS, ORDER_BY};
