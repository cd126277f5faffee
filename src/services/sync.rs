//! Run orchestration: one fetch, one reconciliation per configured label.

use tracing::info;

use crate::domain::errors::SyncResult;
use crate::domain::ports::{IssueSource, SheetStore};
use crate::services::reconciler::Reconciler;

/// Fixed label-to-worksheet routing table, processed in declared order.
pub const LABEL_WORKSHEETS: [(&str, &str); 8] = [
    ("kind/epic", "epics"),
    ("team/ide", "team-ide"),
    ("team/osio", "team-osio"),
    ("team/platform", "team-platform"),
    ("team/plugin", "team-plugins"),
    ("team/enterprise", "team-ent"),
    ("team/production", "team-prod"),
    ("team/support", "team-support"),
];

/// Worksheet header row, asserted on every run.
pub const HEADER_COLUMNS: [&str; 4] = ["number", "name", "link", "status"];

/// Rows to skip when listing: the header occupies one row.
pub const HEADER_OFFSET: usize = 1;

/// Drives a full sync run.
///
/// Single logical thread of control: every remote call is awaited before the
/// next one is issued. Labels are processed independently in the table's
/// declared order; the first error aborts the entire run.
pub struct SyncOrchestrator<'a> {
    issue_source: &'a dyn IssueSource,
    sheet_store: &'a dyn SheetStore,
}

impl<'a> SyncOrchestrator<'a> {
    /// Wire an orchestrator over the two capability providers.
    pub fn new(issue_source: &'a dyn IssueSource, sheet_store: &'a dyn SheetStore) -> Self {
        Self {
            issue_source,
            sheet_store,
        }
    }

    /// Fetch all open issues once, then reconcile each configured worksheet.
    pub async fn run(&self, owner: &str, repo: &str) -> SyncResult<()> {
        let issues = self.issue_source.fetch_open_issues(owner, repo).await?;
        info!("retrieved {} open issues from {owner}/{repo}", issues.len());

        self.sheet_store.authenticate().await?;

        let reconciler = Reconciler::new(self.sheet_store);
        for (label, title) in LABEL_WORKSHEETS {
            let worksheet = self.sheet_store.get_or_create_worksheet(title).await?;
            info!("set header row for {label}");
            self.sheet_store
                .set_header_row(&worksheet, &HEADER_COLUMNS)
                .await?;
            let rows = self
                .sheet_store
                .list_rows(&worksheet, HEADER_OFFSET)
                .await?;
            info!("got {} rows for worksheet {}", rows.len(), worksheet.title);

            let stats = reconciler
                .reconcile(&issues, label, &worksheet, rows)
                .await?;
            info!(
                label,
                deleted = stats.deleted,
                updated = stats.updated,
                inserted = stats.inserted,
                "worksheet reconciled"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{SyncError, SyncResult};
    use crate::domain::models::{Issue, NewRow, Row, Worksheet};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubIssueSource {
        issues: Vec<Issue>,
    }

    #[async_trait]
    impl IssueSource for StubIssueSource {
        async fn fetch_open_issues(&self, _: &str, _: &str) -> SyncResult<Vec<Issue>> {
            Ok(self.issues.clone())
        }
    }

    /// Records the order of store operations so the tests can assert the
    /// orchestration sequence without a real spreadsheet.
    #[derive(Default)]
    struct RecordingSheetStore {
        operations: Mutex<Vec<String>>,
        fail_headers: bool,
    }

    impl RecordingSheetStore {
        fn record(&self, op: impl Into<String>) {
            self.operations.lock().unwrap().push(op.into());
        }

        fn operations(&self) -> Vec<String> {
            self.operations.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SheetStore for RecordingSheetStore {
        async fn authenticate(&self) -> SyncResult<()> {
            self.record("authenticate");
            Ok(())
        }

        async fn get_or_create_worksheet(&self, title: &str) -> SyncResult<Worksheet> {
            self.record(format!("worksheet:{title}"));
            Ok(Worksheet {
                sheet_id: 1,
                title: title.to_string(),
            })
        }

        async fn set_header_row(&self, worksheet: &Worksheet, columns: &[&str]) -> SyncResult<()> {
            self.record(format!("header:{}:{}", worksheet.title, columns.join(",")));
            if self.fail_headers {
                return Err(SyncError::Remote {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(())
        }

        async fn list_rows(&self, worksheet: &Worksheet, offset: usize) -> SyncResult<Vec<Row>> {
            self.record(format!("list:{}:{offset}", worksheet.title));
            Ok(Vec::new())
        }

        async fn add_row(&self, worksheet: &Worksheet, fields: &NewRow) -> SyncResult<()> {
            self.record(format!("add:{}:{}", worksheet.title, fields.number));
            Ok(())
        }

        async fn update_row(&self, _: &Worksheet, _: &Row) -> SyncResult<()> {
            Ok(())
        }

        async fn delete_row(&self, _: &Worksheet, _: &Row) -> SyncResult<()> {
            Ok(())
        }
    }

    fn issue(number: u64, label: &str) -> Issue {
        Issue {
            number,
            title: format!("Issue {number}"),
            html_url: format!("https://github.com/eclipse/che/issues/{number}"),
            labels: vec![crate::domain::models::Label {
                name: label.to_string(),
            }],
            state: "open".to_string(),
        }
    }

    #[tokio::test]
    async fn processes_labels_in_declared_order() {
        let source = StubIssueSource { issues: Vec::new() };
        let store = RecordingSheetStore::default();

        SyncOrchestrator::new(&source, &store)
            .run("eclipse", "che")
            .await
            .unwrap();

        let ops = store.operations();
        assert_eq!(ops[0], "authenticate");

        let worksheet_ops: Vec<&String> =
            ops.iter().filter(|op| op.starts_with("worksheet:")).collect();
        let expected: Vec<String> = LABEL_WORKSHEETS
            .iter()
            .map(|(_, title)| format!("worksheet:{title}"))
            .collect();
        assert_eq!(worksheet_ops.len(), expected.len());
        for (actual, wanted) in worksheet_ops.iter().zip(&expected) {
            assert_eq!(*actual, wanted);
        }
    }

    #[tokio::test]
    async fn asserts_header_and_skips_it_when_listing() {
        let source = StubIssueSource { issues: Vec::new() };
        let store = RecordingSheetStore::default();

        SyncOrchestrator::new(&source, &store)
            .run("eclipse", "che")
            .await
            .unwrap();

        let ops = store.operations();
        assert!(ops.contains(&"header:epics:number,name,link,status".to_string()));
        assert!(ops.contains(&"list:epics:1".to_string()));
    }

    #[tokio::test]
    async fn routes_issues_to_matching_worksheets_only() {
        let source = StubIssueSource {
            issues: vec![issue(1, "kind/epic"), issue(2, "team/ide")],
        };
        let store = RecordingSheetStore::default();

        SyncOrchestrator::new(&source, &store)
            .run("eclipse", "che")
            .await
            .unwrap();

        let ops = store.operations();
        assert!(ops.contains(&"add:epics:1".to_string()));
        assert!(ops.contains(&"add:team-ide:2".to_string()));
        assert!(!ops.contains(&"add:epics:2".to_string()));
    }

    #[tokio::test]
    async fn first_error_aborts_the_run() {
        let source = StubIssueSource { issues: Vec::new() };
        let store = RecordingSheetStore {
            fail_headers: true,
            ..Default::default()
        };

        let result = SyncOrchestrator::new(&source, &store)
            .run("eclipse", "che")
            .await;

        assert!(matches!(result, Err(SyncError::Remote { status: 500, .. })));
        // Only the first label was attempted.
        let headers = store
            .operations()
            .iter()
            .filter(|op| op.starts_with("header:"))
            .count();
        assert_eq!(headers, 1);
    }
}
