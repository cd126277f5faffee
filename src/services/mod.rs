//! Service layer: reconciliation and run orchestration.

pub mod reconciler;
pub mod sync;

pub use reconciler::{ReconcileStats, Reconciler};
pub use sync::{SyncOrchestrator, HEADER_COLUMNS, HEADER_OFFSET, LABEL_WORKSHEETS};
