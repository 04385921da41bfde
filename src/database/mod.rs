//! Storage layer.
//!
//! Everything the tracker persists goes through the [`traits::database_backend::DatabaseBackend`]
//! trait. The implementation is picked at runtime from `database.engine`:
//!
//! - `sqlite3` - SQLite file through an `sqlx` pool
//! - `mysql` - MySQL/MariaDB through an `sqlx` pool
//! - `memory` - process local maps, nothing survives a restart
//!
//! "Not found" is always `Ok(None)`; errors are reserved for the engine itself failing.

pub mod enums;
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod traits;
