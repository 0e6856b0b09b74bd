//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod companion;
pub mod conversation;
pub mod footprint;
pub mod pool;
pub mod profile;
