//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Schema created with CREATE TABLE IF NOT EXISTS at startup
//! - Repositories borrow the pool and own their SQL

pub mod migrations;
pub mod pool;
pub mod repos;

pub use migrations::run_migrations;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
