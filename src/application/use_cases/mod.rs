pub mod upload_ingestion;
