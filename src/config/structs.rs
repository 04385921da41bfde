//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Storage engine selection and connection string.
pub mod database_config;

/// HTTP server configuration.
pub mod http_trackers_config;

/// Core tracker behaviour settings.
pub mod tracker_config;

/// UDP server configuration.
pub mod udp_trackers_config;
