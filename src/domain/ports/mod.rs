//! Ports: traits the infrastructure adapters implement.

pub mod issue_source;
pub mod sheet_store;

pub use issue_source::IssueSource;
pub use sheet_store::SheetStore;
