//! unibridge-server: HTTP bridge to the university database
//!
//! Maps a fixed catalog of REST operations (students, faculty, teaching
//! loads, enrollment report) onto single parameterized SQL statements.
//! The store is injected as `Arc<dyn UniversityStore>`, so the router runs
//! unchanged against MySQL or the in-memory store used in tests.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbConfig, DbError, MemoryStore, MySqlStore, UniversityStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
