use std::fmt;

/// Upload pipeline error taxonomy.
///
/// Variants carry a human-readable message; the mapping to HTTP status codes
/// happens at the interface boundary only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Wrong method, malformed multipart body, missing file field.
    Request(String),
    /// Unsupported extension or unreadable/ambiguous tabular content.
    Format(String),
    /// DDL generation or execution failure.
    Schema(String),
    /// Per-row insert failure, including arity mismatches from short rows.
    Load(String),
    /// Startup-time configuration failure. Fatal to the process.
    Config(String),
    /// Database bootstrap or health failure.
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Format(msg) => write!(f, "Format error: {}", msg),
            AppError::Schema(msg) => write!(f, "Schema error: {}", msg),
            AppError::Load(msg) => write!(f, "Load error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type Result<T> = std::result::Result<T, AppError>;
