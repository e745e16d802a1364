// ============================================================
// TABULAR PARSER ADAPTERS
// ============================================================
// Turn uploaded bytes into a TabularDataset based on the declared format

mod delimited;
mod workbook;

pub use delimited::parse_delimited;
pub use workbook::parse_workbook;

use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::tabular::TabularDataset;

/// Supported upload formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    Delimited,
    Workbook,
}

impl TabularFormat {
    /// Select the parser from the file name's extension.
    ///
    /// The match is case-sensitive: `.csv` and `.xlsx` exactly, nothing else.
    /// Selection happens before any parsing is attempted.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TabularFormat::Delimited),
            Some("xlsx") => Ok(TabularFormat::Workbook),
            _ => Err(AppError::Format(format!(
                "unsupported file format: {}",
                file_name
            ))),
        }
    }
}

/// Parse uploaded bytes according to the selected format.
pub fn parse_dataset(format: TabularFormat, bytes: &[u8]) -> Result<TabularDataset> {
    match format {
        TabularFormat::Delimited => parse_delimited(bytes),
        TabularFormat::Workbook => parse_workbook(bytes),
    }
}
