use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_reaper: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub files: AtomicI64,
    pub peers_reaped: AtomicI64,
    pub background_failures: AtomicI64,
    pub tcp4_connections_handled: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp4_scrapes_handled: AtomicI64,
    pub tcp4_failure: AtomicI64,
    pub tcp4_not_found: AtomicI64,
    pub tcp6_connections_handled: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub tcp6_scrapes_handled: AtomicI64,
    pub tcp6_failure: AtomicI64,
    pub tcp6_not_found: AtomicI64,
    pub udp4_connections_handled: AtomicI64,
    pub udp4_announces_handled: AtomicI64,
    pub udp4_scrapes_handled: AtomicI64,
    pub udp4_bad_request: AtomicI64,
    pub udp4_invalid_request: AtomicI64,
    pub udp6_connections_handled: AtomicI64,
    pub udp6_announces_handled: AtomicI64,
    pub udp6_scrapes_handled: AtomicI64,
    pub udp6_bad_request: AtomicI64,
    pub udp6_invalid_request: AtomicI64,
}
