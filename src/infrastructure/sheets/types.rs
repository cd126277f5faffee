//! Wire types for the Google Sheets v4 REST API.

use serde::Deserialize;

/// Response from the OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent Sheets calls.
    pub access_token: String,
}

/// Spreadsheet metadata, trimmed to the worksheet listing.
#[derive(Debug, Deserialize)]
pub struct SpreadsheetResponse {
    /// Worksheets in the document.
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

/// One worksheet entry in the spreadsheet metadata.
#[derive(Debug, Deserialize)]
pub struct SheetEntry {
    /// Worksheet properties.
    pub properties: SheetProperties,
}

/// Worksheet properties.
#[derive(Debug, Deserialize)]
pub struct SheetProperties {
    /// Stable sheet identifier.
    #[serde(rename = "sheetId", default)]
    pub sheet_id: i64,

    /// Worksheet title.
    pub title: String,
}

/// Response from a `batchUpdate` call, trimmed to `addSheet` replies.
#[derive(Debug, Deserialize)]
pub struct BatchUpdateResponse {
    /// One reply per request in the batch.
    #[serde(default)]
    pub replies: Vec<BatchUpdateReply>,
}

/// One reply in a `batchUpdate` response.
#[derive(Debug, Deserialize)]
pub struct BatchUpdateReply {
    /// Present when the corresponding request was an `addSheet`.
    #[serde(rename = "addSheet")]
    pub add_sheet: Option<AddSheetReply>,
}

/// Reply payload for an `addSheet` request.
#[derive(Debug, Deserialize)]
pub struct AddSheetReply {
    /// Properties of the newly created worksheet.
    pub properties: SheetProperties,
}

/// A range of cell values as returned by the values API. With the default
/// formatted rendering every cell arrives as a string, and trailing empty
/// cells are omitted (rows may be ragged).
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    /// Row-major cell values; absent when the range is empty.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_spreadsheet_metadata() {
        let raw = serde_json::json!({
            "sheets": [
                {"properties": {"sheetId": 0, "title": "epics"}},
                {"properties": {"sheetId": 1201, "title": "team-ide"}}
            ]
        });

        let response: SpreadsheetResponse =
            serde_json::from_value(raw).expect("metadata should deserialize");
        assert_eq!(response.sheets.len(), 2);
        assert_eq!(response.sheets[1].properties.sheet_id, 1201);
        assert_eq!(response.sheets[1].properties.title, "team-ide");
    }

    #[test]
    fn deserializes_empty_value_range() {
        let response: ValueRange =
            serde_json::from_value(serde_json::json!({"range": "'epics'!A2:D"}))
                .expect("empty range should deserialize");
        assert!(response.values.is_empty());
    }
}
