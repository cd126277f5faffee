//! sheetsync - GitHub issues to Google Sheets synchronizer
//!
//! A one-shot batch job that mirrors the open issues of a single GitHub
//! repository into per-label worksheets of one Google Sheets document,
//! keyed by issue number: stale rows are pruned, renamed issues get their
//! row refreshed, and new label-matching issues are appended.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, error taxonomy, and the
//!   `IssueSource`/`SheetStore` ports
//! - **Service Layer** (`services`): the reconciliation algorithm and the
//!   run orchestrator
//! - **Infrastructure Layer** (`infrastructure`): credentials loading plus
//!   the GitHub and Google Sheets adapters
//! - **CLI Layer** (`cli`): argument parsing and wiring

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{SyncError, SyncResult};
pub use domain::models::{Credentials, Issue, Label, NewRow, Row, ServiceAccountKey, Worksheet};
pub use domain::ports::{IssueSource, SheetStore};
pub use infrastructure::config::CredentialsLoader;
pub use infrastructure::github::{GithubClient, GithubClientConfig};
pub use infrastructure::sheets::{SheetsClient, SheetsClientConfig};
pub use services::{ReconcileStats, Reconciler, SyncOrchestrator, LABEL_WORKSHEETS};
