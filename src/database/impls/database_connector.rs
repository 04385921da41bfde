use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::storage_error::StorageError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_memory::DatabaseConnectorMemory;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;

impl DatabaseConnector {
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> Result<DatabaseConnector, StorageError>
    {
        let engine = config.database.engine;
        let backend: Arc<dyn DatabaseBackend> = match engine {
            DatabaseDrivers::sqlite3 => { Arc::new(DatabaseConnectorSQLite::connect(&config.database.path).await?) }
            DatabaseDrivers::mysql => { Arc::new(DatabaseConnectorMySQL::connect(&config.database.path).await?) }
            DatabaseDrivers::memory => {
                info!("[BOOT] Using in-memory storage, nothing will be persisted");
                Arc::new(DatabaseConnectorMemory::new())
            }
        };
        if create_database {
            backend.create_tables().await?;
        }
        Ok(DatabaseConnector { backend, engine })
    }

    pub fn from_backend(engine: DatabaseDrivers, backend: Arc<dyn DatabaseBackend>) -> DatabaseConnector
    {
        DatabaseConnector { backend, engine }
    }

    pub fn engine(&self) -> DatabaseDrivers
    {
        self.engine
    }

    /// Owned handle for use inside spawned tasks.
    pub fn backend(&self) -> Arc<dyn DatabaseBackend>
    {
        self.backend.clone()
    }
}

impl Deref for DatabaseConnector {
    type Target = dyn DatabaseBackend;

    fn deref(&self) -> &Self::Target {
        self.backend.as_ref()
    }
}

impl fmt::Debug for DatabaseConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnector").field("engine", &self.engine).finish()
    }
}
