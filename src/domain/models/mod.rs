//! Domain models for the issue-to-worksheet sync.

pub mod credentials;
pub mod issue;
pub mod row;
pub mod worksheet;

pub use credentials::{Credentials, ServiceAccountKey};
pub use issue::{Issue, Label};
pub use row::{NewRow, Row};
pub use worksheet::Worksheet;
