use serde::{Deserialize, Serialize};

/// A peer of one file, identified by `(file_id, user_id, ip)`.
///
/// Byte counters are the absolute values last reported by the client.
/// `uploaded` and `downloaded` only grow, `left` only shrinks.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct FileUserRecord {
    pub file_id: i64,
    pub user_id: i64,
    pub ip: String,
    pub port: u16,
    pub active: bool,
    pub completed: bool,
    pub announced: u64,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub last_seen: i64,
    pub created_at: i64,
}
