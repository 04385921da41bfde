use crate::tracker::structs::info_hash::InfoHash;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ScrapeRequest {
    pub connection_id: u64,
    pub action: u32,
    pub transaction_id: u32,
    /// At most 70; an all zero hash ends the list.
    pub info_hashes: Vec<InfoHash>,
}
