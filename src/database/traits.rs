/// Storage interface implemented by every engine.
pub mod database_backend;
