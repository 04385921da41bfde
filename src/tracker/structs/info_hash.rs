//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It uniquely identifies a torrent across the BitTorrent network. Storage
/// keys files by the lowercase 40 character hex form (`to_string()`).
///
/// # Example
///
/// ```rust
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0xde; 20]);
/// assert_eq!(hash.to_string().len(), 40);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
