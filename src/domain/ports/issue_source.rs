//! Port for the issue-tracking API.

use async_trait::async_trait;

use crate::domain::errors::SyncResult;
use crate::domain::models::Issue;

/// Capability provider for listing open issues.
///
/// This is a port in the hexagonal sense: the services layer depends on the
/// trait, and the infrastructure layer implements it against the concrete
/// REST API. Implementations authenticate with a bearer token and follow
/// pagination transparently, accumulating the full listing in memory and
/// preserving API order. Failures are never retried here.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch every open issue for `owner/repo`, across all pages.
    ///
    /// # Errors
    ///
    /// * [`SyncError::Auth`](crate::domain::SyncError::Auth) when the token
    ///   is rejected.
    /// * [`SyncError::Network`](crate::domain::SyncError::Network) on
    ///   transport failure.
    /// * [`SyncError::Remote`](crate::domain::SyncError::Remote) for any
    ///   other API failure.
    async fn fetch_open_issues(&self, owner: &str, repo: &str) -> SyncResult<Vec<Issue>>;
}
