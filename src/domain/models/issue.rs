//! Open-issue snapshot as returned by the GitHub issues listing.

use serde::{Deserialize, Serialize};

/// A single label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name, e.g. `kind/epic`.
    pub name: String,
}

/// A unit of tracked work, identified by a repository-unique number.
///
/// Immutable snapshot for the duration of a run; fetched fresh each run and
/// never persisted locally. The listing is taken exactly as the API returns
/// it, pull requests included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Repository-unique issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Browser URL for the issue.
    pub html_url: String,

    /// Labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Issue state as reported by the API (`open` for everything we fetch).
    #[serde(default)]
    pub state: String,
}

impl Issue {
    /// Whether this issue carries the given label.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }
}
