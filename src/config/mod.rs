//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Announce interval, numwant cap, passkey and client whitelist gates
//! - **database**: Storage engine and connection string
//! - **http_server**: HTTP server instances
//! - **udp_server**: UDP server instances
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", true)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration loading and validation.
pub mod tests;
