//! # Swarm Tracker
//!
//! A BitTorrent tracker that answers compact HTTP announces and BEP 15 UDP
//! announces from a SQL store of files and peers.
//!
//! ## Overview
//!
//! Every announce or scrape passes through one transport-neutral pipeline
//! in [`tracker`]: validate the query, resolve the file by info hash, refuse
//! unknown or unverified files, record the peer and answer with counts and
//! a compact peer list. The transports only parse requests and pick a
//! [`tracker::traits::response_formatter::ResponseFormatter`].
//!
//! Writes that the client does not need to wait for (announce logs, peer
//! updates and per-file reaping) run on a bounded set of background tasks
//! which are drained at shutdown.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 15: UDP Tracker Protocol
//! - BEP 23: Tracker Returns Compact Peer Lists
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = TorrentTracker::new(config, true).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, compact peers, logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Storage trait with SQLite, MySQL and in-memory back-ends
//! - [`http`] - HTTP tracker protocol implementation
//! - [`stats`] - Runtime counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Announce, scrape, reaper and background tasks
//! - [`udp`] - UDP tracker protocol implementation (BEP 15)

/// Common utilities and shared functionality.
///
/// Contains the query string parser, the compact peer codec, the codec
/// error type and logging setup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Storage module.
///
/// Defines the `DatabaseBackend` trait and its SQLite, MySQL and in-memory
/// implementations.
pub mod database;

/// HTTP tracker protocol implementation.
pub mod http;

/// Runtime counters for announces, scrapes, failures and the reaper.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the announce and scrape pipeline, passkey and whitelist checks,
/// the peer reaper and the background task pool.
pub mod tracker;

/// UDP tracker protocol implementation (BEP 15).
///
/// Implements the connect, announce and scrape actions together with the
/// connection id handshake.
pub mod udp;
