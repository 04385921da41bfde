use serde::{Deserialize, Serialize};
use crate::tracker::enums::announce_event::AnnounceEvent;

/// Audit row written once per announce. Never read back by the tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct AnnounceLog {
    pub info_hash: String,
    pub peer_id: String,
    pub ip: String,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
    pub key: String,
    pub client: String,
    pub user_id: i64,
    pub created_at: i64,
}
