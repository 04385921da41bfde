//! Tracker protocol engine.
//!
//! Transport adapters (HTTP and UDP) turn a raw request into a normalized
//! parameter map and call [`TorrentTracker::announce`](crate::tracker::structs::torrent_tracker::TorrentTracker::announce) or
//! [`TorrentTracker::scrape`](crate::tracker::structs::torrent_tracker::TorrentTracker::scrape), tagging the call with a [`Transport`]. The
//! engine resolves the file, gates it on verification, keeps per-user peer
//! records up to date and hands the result to the formatter matching the
//! transport.
//!
//! # Main Components
//!
//! - `TorrentTracker` - The engine, shared behind an `Arc` by every adapter
//! - `BackgroundTasks` - Bounded dispatcher for best-effort persistence
//! - `InfoHash` - 20-byte torrent identifier
//! - `TorrentFile` / `FileUserRecord` - The stored file and peer model
//! - `ResponseFormatter` - Bencode or binary encoding of engine results
//!
//! # Durability
//!
//! Audit logs, peer updates and reaper sweeps are dispatched through
//! `BackgroundTasks` and never delay a response. They are written at most
//! once; failures are logged and counted, never retried.
//!
//! [`Transport`]: crate::tracker::enums::transport::Transport

/// Enumerations for tracker operations.
///
/// Contains the announce event, the transport tag and the error taxonomy.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
///
/// Contains the stored entities, the normalized request types and the
/// transport-neutral results.
pub mod structs;

/// Traits implemented by the transport formatters.
pub mod traits;

/// Unit tests for tracker functionality.
pub mod tests;
