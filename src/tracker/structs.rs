//! Data structures for BitTorrent tracker operations.

/// Main tracker instance struct.
///
/// Holds the configuration, the storage connector, the UDP connection
/// table, the statistics counters and the background dispatcher.
pub mod torrent_tracker;

/// Bounded dispatcher for detached persistence tasks.
pub mod background_tasks;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// Validated announce parameters.
pub mod announce_query_request;

/// Validated scrape parameters.
///
/// Holds one or more info hashes, answered in request order.
pub mod scrape_query_request;

/// Result of a successful announce, before formatting.
pub mod announce_data;

/// Per-file result of a successful scrape, before formatting.
pub mod scrape_entry;

/// A tracked torrent file.
pub mod torrent_file;

/// A peer of a file, keyed by file, user and IP.
pub mod file_user_record;

/// Audit row for one announce.
pub mod announce_log;

/// Audit row for one scraped hash.
pub mod scrape_log;

/// User account resolved from a passkey.
pub mod user;

/// Allowed client prefix.
pub mod whitelist_entry;
