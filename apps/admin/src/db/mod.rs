pub mod migrations;
pub mod models;
pub mod queries;
pub mod sqlite_store;

pub use migrations::{create_database_pool, create_database_pool_with_url};
pub use sqlite_store::SqliteStore;
