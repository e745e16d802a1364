use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::tabular::ColumnType;

/// Database access seam for the upload pipeline.
///
/// The orchestrator receives an implementation explicitly per call; nothing
/// in the crate holds a process-wide handle.
#[async_trait]
pub trait TableStore {
    /// Create the target table if it does not exist. A pre-existing table
    /// with a different schema is left untouched; later inserts surface the
    /// mismatch instead.
    async fn create_table(
        &self,
        table: &str,
        headers: &[String],
        types: &[ColumnType],
    ) -> Result<()>;

    /// Insert every row as its own statement, in file order. No batching and
    /// no spanning transaction: a mid-load failure leaves prior rows
    /// committed and the remainder un-attempted.
    async fn insert_rows(&self, table: &str, headers: &[String], rows: &[Vec<String>])
        -> Result<()>;

    /// Liveness probe.
    async fn ping(&self) -> Result<()>;
}

/// Quote an arbitrary string as a SQL identifier: double every embedded
/// double quote, then wrap in double quotes.
///
/// This is the sole defense for identifier position; cell values go through
/// bind parameters instead. No length limits, no reserved-word handling.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Build the CREATE TABLE statement text. Column order equals header order;
/// a type position missing from `types` falls back to VARCHAR.
fn build_create_table_sql(table: &str, headers: &[String], types: &[ColumnType]) -> String {
    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let sql_type = types.get(i).copied().unwrap_or(ColumnType::Text).sql_name();
            format!("{} {}", quote_ident(header), sql_type)
        })
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_ident(table),
        columns.join(", ")
    )
}

/// Build the INSERT template: one positional placeholder per header, in
/// header order. Built once and reused for every row.
fn build_insert_sql(table: &str, headers: &[String]) -> String {
    let columns: Vec<String> = headers.iter().map(|h| quote_ident(h)).collect();
    let placeholders: Vec<String> = (1..=headers.len()).map(|i| format!("${}", i)).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(table),
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Positional bind list for one row.
///
/// A row with at least as many cells as headers binds the first
/// `headers.len()` cells; extra cells are ignored. A short row degrades to
/// `Empty`: the statement executes with no bound values at all, which the
/// engine rejects as an arity mismatch. Whole-row drop, not per-cell null
/// fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowArguments<'a> {
    Bound(Vec<&'a str>),
    Empty,
}

impl<'a> RowArguments<'a> {
    pub fn from_row(header_count: usize, row: &'a [String]) -> Self {
        if row.len() < header_count {
            return RowArguments::Empty;
        }
        RowArguments::Bound(row.iter().take(header_count).map(String::as_str).collect())
    }
}

/// sqlx-backed store used by the running service.
pub struct PgTableStore {
    pool: PgPool,
}

impl PgTableStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableStore for PgTableStore {
    async fn create_table(
        &self,
        table: &str,
        headers: &[String],
        types: &[ColumnType],
    ) -> Result<()> {
        if headers.is_empty() {
            return Err(AppError::Schema("no columns".to_string()));
        }

        let ddl = build_create_table_sql(table, headers, types);
        debug!("issuing DDL: {}", ddl);

        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Schema(format!("failed to create table: {}", e)))?;
        Ok(())
    }

    async fn insert_rows(
        &self,
        table: &str,
        headers: &[String],
        rows: &[Vec<String>],
    ) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let stmt = build_insert_sql(table, headers);

        for row in rows {
            let mut query = sqlx::query(&stmt);
            if let RowArguments::Bound(values) = RowArguments::from_row(headers.len(), row) {
                for value in values {
                    query = query.bind(value);
                }
            }
            query
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Load(format!("failed to insert row: {}", e)))?;
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("database health check failed: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_quote_ident_escapes_embedded_quotes() {
        assert_eq!(quote_ident("plain"), "\"plain\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
        assert_eq!(quote_ident("\"\""), "\"\"\"\"\"\"");
        assert_eq!(quote_ident("drop table; --"), "\"drop table; --\"");
    }

    #[test]
    fn test_create_table_statement_text() {
        let sql = build_create_table_sql(
            "t",
            &headers(&["x", "y"]),
            &[ColumnType::Numeric, ColumnType::Text],
        );
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"t\" (\"x\" NUMERIC, \"y\" VARCHAR)"
        );
    }

    #[test]
    fn test_create_table_defaults_missing_types_to_varchar() {
        let sql = build_create_table_sql("t", &headers(&["a", "b"]), &[ColumnType::Numeric]);
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"t\" (\"a\" NUMERIC, \"b\" VARCHAR)"
        );
    }

    #[test]
    fn test_insert_statement_text() {
        let sql = build_insert_sql("data", &headers(&["a", "b", "c"]));
        assert_eq!(
            sql,
            "INSERT INTO \"data\" (\"a\", \"b\", \"c\") VALUES ($1, $2, $3)"
        );
    }

    #[test]
    fn test_row_arguments_bind_exact_and_wider_rows() {
        let exact = vec!["1".to_string(), "2".to_string()];
        let wider = vec!["1".to_string(), "2".to_string(), "3".to_string()];

        assert_eq!(
            RowArguments::from_row(2, &exact),
            RowArguments::Bound(vec!["1", "2"])
        );
        // Extra trailing cells are ignored, not bound.
        assert_eq!(
            RowArguments::from_row(2, &wider),
            RowArguments::Bound(vec!["1", "2"])
        );
    }

    #[test]
    fn test_short_row_drops_the_whole_argument_list() {
        let short = vec!["1".to_string()];
        assert_eq!(RowArguments::from_row(2, &short), RowArguments::Empty);

        let empty: Vec<String> = Vec::new();
        assert_eq!(RowArguments::from_row(1, &empty), RowArguments::Empty);
    }
}
