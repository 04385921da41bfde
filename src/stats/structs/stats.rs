use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_reaper: i64,
    pub timestamp_run_console: i64,
    pub files: i64,
    pub peers_reaped: i64,
    pub background_failures: i64,
    pub tcp4_connections_handled: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_scrapes_handled: i64,
    pub tcp4_failure: i64,
    pub tcp4_not_found: i64,
    pub tcp6_connections_handled: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_scrapes_handled: i64,
    pub tcp6_failure: i64,
    pub tcp6_not_found: i64,
    pub udp4_connections_handled: i64,
    pub udp4_announces_handled: i64,
    pub udp4_scrapes_handled: i64,
    pub udp4_bad_request: i64,
    pub udp4_invalid_request: i64,
    pub udp6_connections_handled: i64,
    pub udp6_announces_handled: i64,
    pub udp6_scrapes_handled: i64,
    pub udp6_bad_request: i64,
    pub udp6_invalid_request: i64,
}
