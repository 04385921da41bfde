use serde::{Deserialize, Serialize};

/// A tracked torrent. Created unverified the first time its info hash is
/// seen; only an operator flips `verified`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct TorrentFile {
    /// Zero until the row has been stored.
    pub id: i64,
    /// Lowercase hex of the raw 20 byte hash.
    pub info_hash: String,
    pub verified: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
