use serde::{Deserialize, Serialize};

/// Audit row written once per scraped info hash.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ScrapeLog {
    pub info_hash: String,
    pub user_id: i64,
    pub ip: String,
    pub created_at: i64,
}
