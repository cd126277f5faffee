//! Port for the spreadsheet API.

use async_trait::async_trait;

use crate::domain::errors::SyncResult;
use crate::domain::models::{NewRow, Row, Worksheet};

/// Capability provider for worksheet and row manipulation.
///
/// Every operation is a remote round-trip with no retry: a failure aborts
/// processing of the current label and propagates to the orchestrator, with
/// no rollback of mutations already applied. Implementations may memoize a
/// single document-info snapshot (the worksheet listing) and must invalidate
/// it whenever a worksheet is created.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Establish the session with the spreadsheet service.
    ///
    /// # Errors
    ///
    /// [`SyncError::Auth`](crate::domain::SyncError::Auth) when the service
    /// rejects the credentials.
    async fn authenticate(&self) -> SyncResult<()>;

    /// Find a worksheet by title (case-insensitive) or create one with that
    /// exact title.
    async fn get_or_create_worksheet(&self, title: &str) -> SyncResult<Worksheet>;

    /// Set or overwrite the header row. Idempotent.
    async fn set_header_row(&self, worksheet: &Worksheet, columns: &[&str]) -> SyncResult<()>;

    /// List all data rows after skipping `offset` rows (used to skip the
    /// header), in sheet order.
    async fn list_rows(&self, worksheet: &Worksheet, offset: usize) -> SyncResult<Vec<Row>>;

    /// Append a new row.
    async fn add_row(&self, worksheet: &Worksheet, fields: &NewRow) -> SyncResult<()>;

    /// Persist an updated row in place.
    async fn update_row(&self, worksheet: &Worksheet, row: &Row) -> SyncResult<()>;

    /// Remove a row. Rows below it shift up one position.
    async fn delete_row(&self, worksheet: &Worksheet, row: &Row) -> SyncResult<()>;
}
