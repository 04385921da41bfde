//! UDP tracker protocol implementation (BEP 15).
//!
//! # Protocol Overview
//!
//! The UDP tracker protocol uses a connection-oriented approach:
//! 1. Client sends a connect request carrying the protocol magic
//! 2. Server responds with a connection ID, valid for a fixed two minutes
//! 3. Client uses connection ID for announce/scrape requests
//!
//! # Message Types
//!
//! - **Connect** (action=0): Establish connection, get connection ID
//! - **Announce** (action=1): Register peer, get peer list
//! - **Scrape** (action=2): Query torrent statistics
//! - **Error** (action=3): Error response
//!
//! Every decoder reads through a bounds-checked cursor; truncated input is a
//! `CodecError`, never a panic. Datagrams too short to carry a header are
//! dropped without a reply.

/// Enumerations for decoded UDP requests.
pub mod enums;

/// Implementation blocks for UDP packet handling.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;

/// Traits for UDP message encoding and decoding.
pub mod traits;

/// Core UDP service implementation.
#[allow(clippy::module_inception)]
pub mod udp;

/// Unit tests for the UDP codec and handshake.
pub mod tests;
