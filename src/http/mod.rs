//! HTTP tracker protocol implementation.
//!
//! This module implements the BitTorrent tracker protocol over HTTP as
//! specified in BEP 3 (The BitTorrent Protocol Specification) and BEP 23
//! (Tracker Returns Compact Peer Lists). Only compact announces are served.
//!
//! # Supported Endpoints
//!
//! - `/announce` - Handle peer announcements
//! - `/announce/{passkey}` - Announce booked under the passkey's user
//! - `/scrape` - Query torrent statistics
//! - `/scrape/{passkey}` - Scrape with a passkey
//!
//! Any other path answers `404` with a bencoded failure reason.
//!
//! # Response Format
//!
//! Responses are bencoded dictionaries with sorted keys. Failures use the
//! same format with a `failure reason` key and status `200`.

/// Data structures for HTTP request/response handling.
pub mod structs;

/// Implementation blocks for HTTP service components.
pub mod impls;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
