//! Worksheet handles returned by the sheet store.

/// One tab within the target spreadsheet, holding one row per synced issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    /// Stable sheet identifier assigned by the spreadsheet service.
    pub sheet_id: i64,

    /// Worksheet title. Lookup is case-insensitive; creation uses the exact
    /// configured title.
    pub title: String,
}
