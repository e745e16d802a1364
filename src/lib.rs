//! HTTP service that loads CSV/XLSX uploads into PostgreSQL.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
