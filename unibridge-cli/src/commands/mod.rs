//! Command implementations for the unibridge CLI

pub mod schema;
pub mod serve;

pub use schema::run_init_schema;
pub use serve::run_serve;
