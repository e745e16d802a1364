// ============================================================
// TABULAR DOMAIN LAYER
// ============================================================
// Core types for uploaded tabular data
// No I/O, no async, no external dependencies

mod column_type;
mod dataset;
mod inference;

pub use column_type::ColumnType;
pub use dataset::TabularDataset;
pub use inference::infer_column_types;
