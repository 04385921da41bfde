use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;

/// A validated, normalized announce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    /// Raw bytes as received; storage keys the file by their hex form.
    pub info_hash: Vec<u8>,
    pub peer_id: Vec<u8>,
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
    /// Already defaulted and capped.
    pub numwant: u64,
    pub key: String,
    pub client: String,
}
