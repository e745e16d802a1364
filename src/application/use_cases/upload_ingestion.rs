// ============================================================
// UPLOAD INGESTION USE CASE
// ============================================================
// One pass from raw upload bytes to loaded rows, no retries

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::error::Result;
use crate::domain::tabular::{infer_column_types, TabularDataset};
use crate::infrastructure::db::TableStore;
use crate::infrastructure::tabular::{parse_dataset, TabularFormat};

/// Outcome echoed back to the uploader.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    pub file_name: String,
    pub byte_size: usize,
    pub table: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Sequences format selection, parsing, type inference, table creation, and
/// the row load for one upload. Owns the dataset for the request lifetime;
/// nothing persists in process memory across requests.
pub struct UploadIngestionUseCase {
    store: Arc<dyn TableStore + Send + Sync>,
    table: String,
}

impl UploadIngestionUseCase {
    pub fn new(store: Arc<dyn TableStore + Send + Sync>, table: String) -> Self {
        Self { store, table }
    }

    pub async fn execute(&self, file_name: &str, bytes: &[u8]) -> Result<UploadSummary> {
        let format = TabularFormat::from_file_name(file_name)?;
        let dataset = parse_dataset(format, bytes)?;

        // Types are settled once, right after parse, and never revised.
        let types = infer_column_types(&dataset);

        self.store
            .create_table(&self.table, &dataset.headers, &types)
            .await?;
        self.store
            .insert_rows(&self.table, &dataset.headers, &dataset.rows)
            .await?;

        info!(
            "loaded {} rows into {} from {}",
            dataset.rows.len(),
            self.table,
            file_name
        );

        let TabularDataset { headers, rows } = dataset;
        Ok(UploadSummary {
            file_name: file_name.to_string(),
            byte_size: bytes.len(),
            table: self.table.clone(),
            headers,
            row_count: rows.len(),
        })
    }
}
