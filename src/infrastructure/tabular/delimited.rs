// ============================================================
// DELIMITED-TEXT ADAPTER
// ============================================================
// Semicolon-separated uploads, read eagerly and kept verbatim

use csv::ReaderBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::tabular::TabularDataset;

/// Field separator for delimited uploads. Semicolon, not comma.
const DELIMITER: u8 = b';';

/// Parse semicolon-delimited text into a header row plus data rows.
///
/// Records are kept verbatim: no trimming, no type coercion. Every record
/// must match the width of the first one; a ragged record is malformed
/// content. The first record is the header row and at least one data row
/// must follow it.
pub fn parse_delimited(bytes: &[u8]) -> Result<TabularDataset> {
    let text = String::from_utf8_lossy(bytes);
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result
            .map_err(|e| AppError::Format(format!("failed to read delimited content: {}", e)))?;
        records.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    if records.len() < 2 {
        return Err(AppError::Format(
            "insufficient rows: need a header row and at least one data row".to_string(),
        ));
    }

    let headers = records.remove(0);
    Ok(TabularDataset::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_and_rows_split() {
        let data = parse_delimited(b"a;b;c\n1;2;3\n4;5;6\n").unwrap();
        assert_eq!(data.headers, vec!["a", "b", "c"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec!["1", "2", "3"]);
        assert_eq!(data.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_cells_are_kept_verbatim() {
        let data = parse_delimited(b"name;note\n alice ;\"semi;colon\"\n").unwrap();
        assert_eq!(data.rows[0][0], " alice ");
        assert_eq!(data.rows[0][1], "semi;colon");
    }

    #[test]
    fn test_ragged_records_are_malformed() {
        let err = parse_delimited(b"a;b;c\n1;2\n").unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn test_comma_is_not_a_separator() {
        let data = parse_delimited(b"a;b\n1,5;2\n").unwrap();
        assert_eq!(data.rows[0], vec!["1,5", "2"]);
    }

    #[test]
    fn test_header_only_input_is_rejected() {
        let err = parse_delimited(b"a;b;c\n").unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
        assert!(err.to_string().contains("insufficient rows"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(parse_delimited(b"").is_err());
    }
}
