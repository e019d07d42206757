//! Database layer - store seam, connection pool and repositories
//!
//! # Design Principles
//!
//! - Handlers only see `UniversityStore`; the MySQL pool is injected at startup
//! - One parameterized statement per operation, autocommit, no retries
//! - Rely on DB constraints, handle failures - no check-then-insert

pub mod pool;
pub mod store;
pub mod repos;
pub mod mysql;
pub mod memory;
pub mod schema;

pub use pool::{create_pool, DbConfig};
pub use store::{DbError, UniversityStore};
pub use mysql::MySqlStore;
pub use memory::MemoryStore;
pub use schema::ensure_schema;
