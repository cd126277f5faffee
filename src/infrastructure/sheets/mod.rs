//! Google Sheets adapter: service-account auth plus the sheet store port.

pub mod auth;
pub mod client;
pub mod types;

pub use client::{SheetsClient, SheetsClientConfig};
