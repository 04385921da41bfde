use std::sync::Arc;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::traits::database_backend::DatabaseBackend;

/// Cheap to clone handle on the configured storage engine. Dereferences to
/// the [`DatabaseBackend`] trait object.
#[derive(Clone)]
pub struct DatabaseConnector {
    pub(crate) backend: Arc<dyn DatabaseBackend>,
    pub(crate) engine: DatabaseDrivers,
}
