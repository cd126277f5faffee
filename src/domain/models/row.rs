//! Worksheet row records.

/// A data row in a worksheet, keyed by sheet position.
///
/// The `number` cell is kept as the raw string the sheet holds: rows whose
/// number does not parse (manually added notes and the like) are passed
/// through reconciliation untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based sheet position (the header occupies row 1).
    pub row_index: usize,

    /// Raw contents of the `number` cell.
    pub number: String,

    /// Contents of the `name` cell (the issue title).
    pub name: String,

    /// Contents of the `link` cell.
    pub link: String,

    /// Contents of the `status` cell. Never written by reconciliation.
    pub status: String,
}

impl Row {
    /// The issue number this row tracks, if the cell parses as one.
    pub fn issue_number(&self) -> Option<u64> {
        self.number.trim().parse().ok()
    }
}

/// Fields for a row to be appended. The status cell is left unset on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRow {
    /// Issue number.
    pub number: u64,

    /// Issue title.
    pub name: String,

    /// Issue browser URL.
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(number: &str) -> Row {
        Row {
            row_index: 2,
            number: number.to_string(),
            name: "Fix crash".to_string(),
            link: "https://github.com/eclipse/che/issues/42".to_string(),
            status: String::new(),
        }
    }

    #[test]
    fn issue_number_parses_plain_integer() {
        assert_eq!(row("42").issue_number(), Some(42));
    }

    #[test]
    fn issue_number_tolerates_surrounding_whitespace() {
        assert_eq!(row(" 42 ").issue_number(), Some(42));
    }

    #[test]
    fn issue_number_rejects_non_numeric_cells() {
        assert_eq!(row("abc").issue_number(), None);
        assert_eq!(row("").issue_number(), None);
        assert_eq!(row("42b").issue_number(), None);
        assert_eq!(row("-3").issue_number(), None);
    }
}
