//! Database connector structures.

/// Runtime selected storage handle used by the tracker.
pub mod database_connector;

/// SQLite-specific database connector implementation.
pub mod database_connector_sqlite;

/// MySQL/MariaDB-specific database connector implementation.
pub mod database_connector_mysql;

/// In-process storage, used for tests and throwaway deployments.
pub mod database_connector_memory;
