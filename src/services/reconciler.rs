//! Core reconciliation between the open-issue set and one worksheet.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::errors::SyncResult;
use crate::domain::models::{Issue, NewRow, Row, Worksheet};
use crate::domain::ports::SheetStore;

/// Mutation counts for one worksheet's reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Rows deleted because their issue is no longer open.
    pub deleted: usize,

    /// Rows whose name was refreshed to the current issue title.
    pub updated: usize,

    /// Rows appended for new label-matching issues.
    pub inserted: usize,
}

/// Aligns a worksheet's rows with the current open-issue set.
///
/// Three sequential passes over small in-memory lists: prune, update,
/// insert. Both number sets are computed up front, before any mutation runs:
/// the insert pass checks the pre-prune row-number set, so a row pruned this
/// run still counts as present and suppresses re-insertion. That ordering is
/// deliberate and load-bearing.
pub struct Reconciler<'a, S: SheetStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SheetStore + ?Sized> Reconciler<'a, S> {
    /// Create a reconciler driving the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Reconcile one worksheet against the full open-issue list.
    ///
    /// `rows` must be freshly listed from the store. Mutations are issued
    /// sequentially and immediately; a failure propagates with whatever has
    /// already been applied left in place.
    pub async fn reconcile(
        &self,
        issues: &[Issue],
        label: &str,
        worksheet: &Worksheet,
        rows: Vec<Row>,
    ) -> SyncResult<ReconcileStats> {
        let numbers_in_sheet: HashSet<u64> = rows.iter().filter_map(Row::issue_number).collect();
        let open_numbers: HashSet<u64> = issues.iter().map(|issue| issue.number).collect();

        let mut stats = ReconcileStats::default();

        // Pass 1: prune rows whose issue is not open under any label. Rows
        // with an unparsable number are manual entries and pass through.
        // Remote deletion shifts later rows up one position, so retained
        // rows get their index adjusted as the sweep goes.
        let mut retained: Vec<Row> = Vec::with_capacity(rows.len());
        let mut removed_above = 0;
        for mut row in rows {
            row.row_index -= removed_above;
            match row.issue_number() {
                Some(number) if !open_numbers.contains(&number) => {
                    info!("removing row for issue #{number}");
                    self.store.delete_row(worksheet, &row).await?;
                    removed_above += 1;
                    stats.deleted += 1;
                }
                _ => retained.push(row),
            }
        }

        // Pass 2: refresh titles. Any open issue whose number appears in the
        // sheet updates the first still-present row with a differing name,
        // label or not. Link and status are never touched.
        for issue in issues
            .iter()
            .filter(|issue| numbers_in_sheet.contains(&issue.number))
        {
            let stale = retained
                .iter_mut()
                .find(|row| row.issue_number() == Some(issue.number) && row.name != issue.title);
            if let Some(row) = stale {
                info!("updating row for issue #{}", issue.number);
                row.name = issue.title.clone();
                self.store.update_row(worksheet, row).await?;
                stats.updated += 1;
            }
        }

        // Pass 3: append label-matching issues not yet in the sheet. The
        // check is against the pre-prune number set: a number whose row was
        // just deleted is still treated as present for this run.
        for issue in issues
            .iter()
            .filter(|issue| issue.has_label(label) && !numbers_in_sheet.contains(&issue.number))
        {
            info!("adding row for issue #{}", issue.number);
            self.store
                .add_row(
                    worksheet,
                    &NewRow {
                        number: issue.number,
                        name: issue.title.clone(),
                        link: issue.html_url.clone(),
                    },
                )
                .await?;
            stats.inserted += 1;
        }

        debug!(
            label,
            deleted = stats.deleted,
            updated = stats.updated,
            inserted = stats.inserted,
            "reconciliation complete"
        );

        Ok(stats)
    }
}
