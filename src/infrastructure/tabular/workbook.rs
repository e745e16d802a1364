// ============================================================
// SPREADSHEET ADAPTER
// ============================================================
// First sheet of an xlsx workbook, stringified cell by cell

use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};

use crate::domain::error::{AppError, Result};
use crate::domain::tabular::TabularDataset;

/// Parse the first sheet of an xlsx workbook into a header row plus data rows.
///
/// Sheet row 0 becomes the headers; every following row appends to the data,
/// with no uniform-width requirement. The workbook handle is scoped to this
/// call and released on every exit path.
pub fn parse_workbook(bytes: &[u8]) -> Result<TabularDataset> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| AppError::Format(format!("failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Format("no sheets in workbook".to_string()))?
        .map_err(|e| AppError::Format(format!("failed to read sheet: {}", e)))?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, row) in range.rows().enumerate() {
        if index == 0 {
            headers = row_cells(row);
        } else {
            rows.push(row_cells(row));
        }
    }

    if headers.is_empty() {
        return Err(AppError::Format("no headers in first sheet".to_string()));
    }

    Ok(TabularDataset::new(headers, rows))
}

/// Stringify one sheet row. Text cells pass through; everything else uses the
/// cell's display form (numbers, booleans, dates).
fn row_cells(row: &[Data]) -> Vec<String> {
    row.iter()
        .map(|cell| {
            cell.as_string()
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("{}", cell))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cells_stringify() {
        let row = vec![
            Data::String("alice".to_string()),
            Data::Float(3.5),
            Data::Int(7),
            Data::Empty,
        ];
        assert_eq!(row_cells(&row), vec!["alice", "3.5", "7", ""]);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let err = parse_workbook(b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }
}
