use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Seconds between announces a client is told to wait.
    pub announce_interval: u64,
    /// Upper bound on the number of peers returned; also the default `numwant`.
    pub max_numwant: u64,
    pub require_passkey: bool,
    pub whitelist_enabled: bool,
    /// Concurrent background persistence tasks.
    pub background_workers: u64,
    /// Lifetime of a UDP connection id, in seconds.
    pub connection_ttl: u64,
}
