use crate::common::structs::compact_peer::CompactPeer;

/// Transport-neutral result of a successful announce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceData {
    /// Seeders.
    pub complete: u64,
    /// Leechers.
    pub incomplete: u64,
    pub downloaded: u64,
    pub interval: u64,
    pub min_interval: u64,
    pub peers: Vec<CompactPeer>,
}
