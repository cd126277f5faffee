//! Domain layer: models, error taxonomy, and the ports the infrastructure
//! adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{SyncError, SyncResult};
