/// Loading, saving and validation of `Configuration`.
pub mod configuration;
