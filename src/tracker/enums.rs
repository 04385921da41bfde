//! Enumerations for tracker operations.

/// Announce event types from the BitTorrent protocol.
///
/// - `None` - Regular update
/// - `Completed` - Download completed (became a seeder)
/// - `Started` - New download started
/// - `Stopped` - Download stopped
pub mod announce_event;

/// Transport a request arrived on, used to pick the response formatter.
pub mod transport;

/// Client visible error taxonomy.
pub mod tracker_error;
