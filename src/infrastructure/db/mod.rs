pub mod connection;
pub mod table_store;

pub use connection::connect_pool;
pub use table_store::{quote_ident, PgTableStore, RowArguments, TableStore};
