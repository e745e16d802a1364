// ============================================================
// TABULAR DATASET
// ============================================================
// Uniform shape produced by every parser adapter

use serde::{Deserialize, Serialize};

/// A parsed upload: one header row plus zero or more data rows of text cells.
///
/// Row order equals file order and is preserved through the load. Individual
/// rows may carry fewer cells than `headers` ("short rows").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularDataset {
    /// Column names in file order. Order-significant, not guaranteed unique.
    pub headers: Vec<String>,

    /// Data rows in file order.
    pub rows: Vec<Vec<String>>,
}

impl TabularDataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, column), if the row reaches that far.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
