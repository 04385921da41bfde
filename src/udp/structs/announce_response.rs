use crate::common::structs::compact_peer::CompactPeer;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub action: u32,
    pub transaction_id: u32,
    pub interval: u32,
    pub leechers: u32,
    pub seeders: u32,
    pub peers: Vec<CompactPeer>,
}
