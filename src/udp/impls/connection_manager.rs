use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use tokio::time::Instant;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::udp::structs::connection_entry::ConnectionEntry;
use crate::udp::structs::connection_manager::ConnectionManager;

pub const DEFAULT_CONNECTION_TTL: Duration = Duration::from_secs(120);

impl ConnectionManager {
    pub fn new(ttl: Duration) -> ConnectionManager
    {
        ConnectionManager {
            entries: Arc::new(RwLock::new(AHashMap::new())),
            ttl,
        }
    }

    /// Issues a fresh id for `remote_addr`, replacing any earlier one, and
    /// schedules its removal after the TTL. Must run inside a tokio runtime.
    pub fn connect(&self, remote_addr: SocketAddr) -> u64
    {
        let connection_id = rand::random::<u64>();
        self.entries.write().insert(remote_addr, ConnectionEntry {
            connection_id,
            issued_at: Instant::now(),
        });

        let entries = self.entries.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut lock = entries.write();
            if lock.get(&remote_addr).is_some_and(|entry| entry.connection_id == connection_id) {
                lock.remove(&remote_addr);
                debug!("[UDP] Connection id for {remote_addr} expired");
            }
        });
        connection_id
    }

    pub fn validate(&self, remote_addr: SocketAddr, connection_id: u64) -> Result<(), TrackerError>
    {
        match self.entries.read().get(&remote_addr) {
            Some(entry) if entry.connection_id == connection_id && entry.issued_at.elapsed() < self.ttl => Ok(()),
            _ => Err(TrackerError::Handshake)
        }
    }

    pub fn ttl(&self) -> Duration
    {
        self.ttl
    }

    pub fn len(&self) -> usize
    {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.read().is_empty()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        ConnectionManager::new(DEFAULT_CONNECTION_TTL)
    }
}
