//! Infrastructure for Renexus: SQLite persistence, configuration loading,
//! and data directory resolution.

pub mod config;
pub mod paths;
pub mod sqlite;
