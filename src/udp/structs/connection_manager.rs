use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::udp::structs::connection_entry::ConnectionEntry;

/// BEP-15 connection ids keyed by remote address.
///
/// Every id lives for exactly `ttl` from issuance. Use does not extend it.
#[derive(Debug, Clone)]
pub struct ConnectionManager {
    pub(crate) entries: Arc<RwLock<AHashMap<SocketAddr, ConnectionEntry>>>,
    pub(crate) ttl: Duration,
}
