use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("no configuration found at {0}")]
    NotFound(String),
    #[error("default configuration written to {0}, edit it and start again")]
    Created(String),
    #[error("[VALIDATE CONFIG] {0}")]
    Invalid(String),
}
