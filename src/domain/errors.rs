//! Error taxonomy for the sync run.
//!
//! No error is retried or recovered locally: every failure propagates to the
//! process boundary, is logged, and terminates the run with exit code 1.
//! Mutations already applied before a failure are left as-is.

use thiserror::Error;

/// Errors that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing or malformed credentials file. Nothing is attempted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Either API rejected the supplied credentials.
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// Transport-level failure talking to a remote service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A remote service answered with a non-auth failure status.
    #[error("Remote service error ({status}): {body}")]
    Remote {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
}

/// Result alias used throughout the crate.
pub type SyncResult<T> = Result<T, SyncError>;
