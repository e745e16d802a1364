use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::error::{AppError, Result};

/// Connect a bounded Postgres pool and verify the database answers.
///
/// Called once at startup; a failure here is fatal to the process.
pub async fn connect_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(|e| AppError::Database(format!("failed to connect to database: {}", e)))?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| AppError::Database(format!("database health check failed: {}", e)))?;

    Ok(pool)
}
