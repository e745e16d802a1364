use crate::domain::error::{AppError, Result};

/// Environment-driven service settings.
///
/// `DATABASE_URL` is required; the process refuses to start without it.
/// Everything else has a default.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Postgres connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Target table every upload loads into.
    pub upload_table: String,
    /// Per-file upload budget in bytes.
    pub max_upload_bytes: usize,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_TABLE: &str = "uploaded_data";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

impl Settings {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL is not set".to_string()))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upload_table =
            std::env::var("UPLOAD_TABLE").unwrap_or_else(|_| DEFAULT_UPLOAD_TABLE.to_string());

        let max_upload_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("MAX_UPLOAD_BYTES is not a valid size: {}", raw))
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url,
            bind_addr,
            upload_table,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so every case runs inside one
    // test function.
    #[test]
    fn test_from_env() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("UPLOAD_TABLE");
        std::env::remove_var("MAX_UPLOAD_BYTES");

        assert!(matches!(Settings::from_env(), Err(AppError::Config(_))));

        std::env::set_var("DATABASE_URL", "postgres://localhost/tabload");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(settings.upload_table, DEFAULT_UPLOAD_TABLE);
        assert_eq!(settings.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);

        std::env::set_var("BIND_ADDR", "127.0.0.1:9999");
        std::env::set_var("UPLOAD_TABLE", "staging");
        std::env::set_var("MAX_UPLOAD_BYTES", "1024");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.bind_addr, "127.0.0.1:9999");
        assert_eq!(settings.upload_table, "staging");
        assert_eq!(settings.max_upload_bytes, 1024);

        std::env::set_var("MAX_UPLOAD_BYTES", "not-a-number");
        assert!(matches!(Settings::from_env(), Err(AppError::Config(_))));

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("UPLOAD_TABLE");
        std::env::remove_var("MAX_UPLOAD_BYTES");
    }
}
