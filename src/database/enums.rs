//! Database enumeration types.

/// Supported database driver types (sqlite3, mysql, memory).
pub mod database_drivers;

/// Failures raised by a storage back-end.
pub mod storage_error;

/// Query dialect of the SQL connectors.
pub mod sql_dialect;
