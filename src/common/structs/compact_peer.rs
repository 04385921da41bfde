use std::net::Ipv4Addr;

/// Size in bytes of one compact peer entry.
pub const COMPACT_PEER_SIZE: usize = 6;

/// A peer as it appears in a compact peer list: IPv4 address followed by the
/// port, both big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactPeer {
    pub ip: Ipv4Addr,
    pub port: u16,
}
