//! Google Sheets v4 adapter for the sheet store port.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{NewRow, Row, ServiceAccountKey, Worksheet};
use crate::domain::ports::SheetStore;
use crate::infrastructure::sheets::auth::fetch_access_token;
use crate::infrastructure::sheets::types::{
    BatchUpdateResponse, SpreadsheetResponse, ValueRange,
};

/// Configuration for the Sheets API client.
#[derive(Debug, Clone)]
pub struct SheetsClientConfig {
    /// Identifier of the target spreadsheet document.
    pub spreadsheet_id: String,

    /// Service-account key used for the token grant.
    pub key: ServiceAccountKey,

    /// Base URL for the API (overridable for tests).
    pub base_url: String,
}

impl SheetsClientConfig {
    /// Config with the production endpoint.
    pub fn new(spreadsheet_id: String, key: ServiceAccountKey) -> Self {
        Self {
            spreadsheet_id,
            key,
            base_url: "https://sheets.googleapis.com".to_string(),
        }
    }
}

/// HTTP client for one spreadsheet document.
///
/// Holds the session token from `authenticate` and one memoized
/// document-info snapshot (the worksheet listing), invalidated whenever a
/// worksheet is created. All operations are single round-trips with no
/// retry.
pub struct SheetsClient {
    http_client: ReqwestClient,
    base_url: String,
    spreadsheet_id: String,
    key: ServiceAccountKey,
    access_token: Mutex<Option<String>>,
    document_info: Mutex<Option<Vec<Worksheet>>>,
}

impl SheetsClient {
    /// Build a client for the configured spreadsheet.
    pub fn new(config: SheetsClientConfig) -> SyncResult<Self> {
        let http_client = ReqwestClient::builder()
            .build()
            .map_err(SyncError::Network)?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            spreadsheet_id: config.spreadsheet_id,
            key: config.key,
            access_token: Mutex::new(None),
            document_info: Mutex::new(None),
        })
    }

    async fn bearer(&self) -> SyncResult<String> {
        self.access_token
            .lock()
            .await
            .clone()
            .ok_or_else(|| SyncError::Auth("spreadsheet session not established".to_string()))
    }

    fn values_url(&self, worksheet_title: &str, cells: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/'{worksheet_title}'!{cells}",
            self.base_url, self.spreadsheet_id
        )
    }

    async fn check_response(response: Response) -> SyncResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_string());
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SyncError::Auth(format!(
                "spreadsheet service rejected the session ({status}): {body}"
            )),
            _ => SyncError::Remote {
                status: status.as_u16(),
                body,
            },
        })
    }

    async fn fetch_document_info(&self) -> SyncResult<Vec<Worksheet>> {
        let url = format!(
            "{}/v4/spreadsheets/{}?fields=sheets.properties(sheetId,title)",
            self.base_url, self.spreadsheet_id
        );
        debug!("GET {url}");
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;
        let response = Self::check_response(response).await?;

        let spreadsheet: SpreadsheetResponse = response.json().await?;
        Ok(spreadsheet
            .sheets
            .into_iter()
            .map(|entry| Worksheet {
                sheet_id: entry.properties.sheet_id,
                title: entry.properties.title,
            })
            .collect())
    }

    /// Worksheet listing, memoized across calls until invalidated.
    async fn worksheets(&self) -> SyncResult<Vec<Worksheet>> {
        let mut cache = self.document_info.lock().await;
        if let Some(worksheets) = cache.as_ref() {
            return Ok(worksheets.clone());
        }
        let worksheets = self.fetch_document_info().await?;
        *cache = Some(worksheets.clone());
        Ok(worksheets)
    }

    async fn batch_update(&self, body: &serde_json::Value) -> SyncResult<Response> {
        let url = format!(
            "{}/v4/spreadsheets/{}:batchUpdate",
            self.base_url, self.spreadsheet_id
        );
        debug!("POST {url}");
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.bearer().await?)
            .json(body)
            .send()
            .await?;
        Self::check_response(response).await
    }

    async fn add_worksheet(&self, title: &str) -> SyncResult<Worksheet> {
        let body = serde_json::json!({
            "requests": [{"addSheet": {"properties": {"title": title}}}]
        });
        let response = self.batch_update(&body).await?;
        let batch: BatchUpdateResponse = response.json().await?;

        let properties = batch
            .replies
            .into_iter()
            .find_map(|reply| reply.add_sheet)
            .map(|reply| reply.properties)
            .ok_or_else(|| SyncError::Remote {
                status: 200,
                body: "addSheet reply missing from batchUpdate response".to_string(),
            })?;

        // The snapshot no longer reflects the document.
        *self.document_info.lock().await = None;

        Ok(Worksheet {
            sheet_id: properties.sheet_id,
            title: properties.title,
        })
    }

    async fn put_values(&self, url: &str, values: &serde_json::Value) -> SyncResult<()> {
        debug!("PUT {url}");
        let response = self
            .http_client
            .put(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(self.bearer().await?)
            .json(&serde_json::json!({ "values": values }))
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SheetStore for SheetsClient {
    async fn authenticate(&self) -> SyncResult<()> {
        let token = fetch_access_token(&self.http_client, &self.key).await?;
        *self.access_token.lock().await = Some(token);
        Ok(())
    }

    async fn get_or_create_worksheet(&self, title: &str) -> SyncResult<Worksheet> {
        info!("creating or finding worksheet for title {title}");
        let worksheets = self.worksheets().await?;
        if let Some(worksheet) = worksheets
            .iter()
            .find(|worksheet| worksheet.title.eq_ignore_ascii_case(title))
        {
            return Ok(worksheet.clone());
        }

        info!("worksheet for {title} does not exist, adding");
        self.add_worksheet(title).await
    }

    async fn set_header_row(&self, worksheet: &Worksheet, columns: &[&str]) -> SyncResult<()> {
        let last_column = column_letter(columns.len());
        let url = self.values_url(&worksheet.title, &format!("A1:{last_column}1"));
        self.put_values(&url, &serde_json::json!([columns])).await
    }

    async fn list_rows(&self, worksheet: &Worksheet, offset: usize) -> SyncResult<Vec<Row>> {
        let first_row = offset + 1;
        let url = self.values_url(&worksheet.title, &format!("A{first_row}:D"));
        debug!("GET {url}");
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;
        let response = Self::check_response(response).await?;

        let range: ValueRange = response.json().await?;
        let cell = |cells: &[String], index: usize| cells.get(index).cloned().unwrap_or_default();
        Ok(range
            .values
            .iter()
            .enumerate()
            .map(|(position, cells)| Row {
                row_index: first_row + position,
                number: cell(cells, 0),
                name: cell(cells, 1),
                link: cell(cells, 2),
                status: cell(cells, 3),
            })
            .collect())
    }

    async fn add_row(&self, worksheet: &Worksheet, fields: &NewRow) -> SyncResult<()> {
        let url = format!("{}:append", self.values_url(&worksheet.title, "A1:D1"));
        debug!("POST {url}");
        let response = self
            .http_client
            .post(&url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(self.bearer().await?)
            .json(&serde_json::json!({
                "values": [[fields.number, fields.name, fields.link, ""]]
            }))
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn update_row(&self, worksheet: &Worksheet, row: &Row) -> SyncResult<()> {
        // Only the name cell is written; link and status stay as they are.
        let url = self.values_url(&worksheet.title, &format!("B{}", row.row_index));
        self.put_values(&url, &serde_json::json!([[row.name]]))
            .await
    }

    async fn delete_row(&self, worksheet: &Worksheet, row: &Row) -> SyncResult<()> {
        let body = serde_json::json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": worksheet.sheet_id,
                        "dimension": "ROWS",
                        "startIndex": row.row_index - 1,
                        "endIndex": row.row_index
                    }
                }
            }]
        });
        self.batch_update(&body).await?;
        Ok(())
    }
}

/// 1-based column index to its A1 letter. Four columns is all the header
/// needs, but stay general for any single-letter width.
fn column_letter(index: usize) -> char {
    debug_assert!((1..=26).contains(&index), "single-letter columns only");
    char::from(b'A' + u8::try_from(index.saturating_sub(1) % 26).unwrap_or(0))
}
