use std::net::Ipv4Addr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;

/// BEP-15 announce, 98 bytes on the wire.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceRequest {
    pub connection_id: u64,
    pub action: u32,
    pub transaction_id: u32,
    pub info_hash: InfoHash,
    pub peer_id: [u8; 20],
    pub downloaded: u64,
    pub left: u64,
    pub uploaded: u64,
    pub event: AnnounceEvent,
    /// `0.0.0.0` means the datagram's source address.
    pub ip: Ipv4Addr,
    pub key: u32,
    /// `0xFFFFFFFF` asks for the default.
    pub num_want: u32,
    pub port: u16,
}
