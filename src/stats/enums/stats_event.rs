//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `TorrentTracker::update_stats()` to move the matching counter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Files,
    PeersReaped,
    BackgroundFailures,
    TimestampReaper,
    TimestampConsole,
    Tcp4ConnectionsHandled,
    Tcp4AnnouncesHandled,
    Tcp4ScrapesHandled,
    Tcp4Failure,
    Tcp4NotFound,
    Tcp6ConnectionsHandled,
    Tcp6AnnouncesHandled,
    Tcp6ScrapesHandled,
    Tcp6Failure,
    Tcp6NotFound,
    Udp4ConnectionsHandled,
    Udp4AnnouncesHandled,
    Udp4ScrapesHandled,
    Udp4BadRequest,
    Udp4InvalidRequest,
    Udp6ConnectionsHandled,
    Udp6AnnouncesHandled,
    Udp6ScrapesHandled,
    Udp6BadRequest,
    Udp6InvalidRequest,
}
