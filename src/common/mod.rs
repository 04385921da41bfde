//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the tracker codebase.
//!
//! # Utilities
//!
//! - Query string parsing
//! - Logging setup
//! - Timestamp utilities
//!
//! # Data Structures
//!
//! - `CompactPeer` - 6 byte IPv4 + port peer representation (BEP 23)
//! - `CodecError` - Failure type shared by every binary decoder
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::common::common::{parse_query, current_time};
//!
//! let params = parse_query(Some("info_hash=%ab%cd...&port=6881".to_string()));
//! let now = current_time();
//! ```

/// Common error enumerations.
pub mod enums;

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common functionality.
pub mod tests;
