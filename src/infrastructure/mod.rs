//! Infrastructure layer: adapters for the external APIs and the credentials
//! file.

pub mod config;
pub mod github;
pub mod sheets;
