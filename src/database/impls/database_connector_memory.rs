use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::Ordering;
use async_trait::async_trait;
use crate::database::enums::storage_error::StorageError;
use crate::database::structs::database_connector_memory::DatabaseConnectorMemory;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::announce_log::AnnounceLog;
use crate::tracker::structs::file_user_record::FileUserRecord;
use crate::tracker::structs::scrape_log::ScrapeLog;
use crate::tracker::structs::torrent_file::TorrentFile;
use crate::tracker::structs::user::User;
use crate::tracker::structs::whitelist_entry::WhitelistEntry;

impl DatabaseConnectorMemory {
    pub fn new() -> DatabaseConnectorMemory
    {
        DatabaseConnectorMemory::default()
    }

    fn next_id(&self) -> i64
    {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn announce_logs(&self) -> Vec<AnnounceLog>
    {
        self.announce_log.read().clone()
    }

    pub fn scrape_logs(&self) -> Vec<ScrapeLog>
    {
        self.scrape_log.read().clone()
    }

    fn count_peers(&self, file_id: i64, filter: impl Fn(&FileUserRecord) -> bool) -> u64
    {
        self.peers.read().values().filter(|peer| peer.file_id == file_id && filter(peer)).count() as u64
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMemory {
    async fn create_tables(&self) -> Result<(), StorageError>
    {
        Ok(())
    }

    async fn load_file(&self, id: i64) -> Result<Option<TorrentFile>, StorageError>
    {
        Ok(self.files.read().get(&id).cloned())
    }

    async fn load_file_by_info_hash(&self, info_hash: &str) -> Result<Option<TorrentFile>, StorageError>
    {
        Ok(self.files.read().values().find(|file| file.info_hash == info_hash).cloned())
    }

    async fn load_files(&self) -> Result<Vec<TorrentFile>, StorageError>
    {
        Ok(self.files.read().values().cloned().collect())
    }

    async fn save_file(&self, file: &TorrentFile) -> Result<TorrentFile, StorageError>
    {
        let mut files = self.files.write();
        if file.id == 0 {
            if let Some(existing) = files.values_mut().find(|existing| existing.info_hash == file.info_hash) {
                existing.updated_at = file.updated_at;
                return Ok(existing.clone());
            }
            let mut stored = file.clone();
            stored.id = self.next_id();
            files.insert(stored.id, stored.clone());
            return Ok(stored);
        }
        if let Some(existing) = files.get_mut(&file.id) {
            existing.verified = file.verified;
            existing.updated_at = file.updated_at;
        }
        Ok(file.clone())
    }

    async fn delete_file(&self, id: i64) -> Result<(), StorageError>
    {
        self.files.write().remove(&id);
        self.peers.write().retain(|(file_id, _, _), _| *file_id != id);
        Ok(())
    }

    async fn load_peer(&self, file_id: i64, user_id: i64, ip: &str) -> Result<Option<FileUserRecord>, StorageError>
    {
        Ok(self.peers.read().get(&(file_id, user_id, ip.to_string())).cloned())
    }

    async fn save_peer(&self, peer: &FileUserRecord) -> Result<(), StorageError>
    {
        let mut peers = self.peers.write();
        let key = (peer.file_id, peer.user_id, peer.ip.clone());
        let created_at = peers.get(&key).map(|existing| existing.created_at).unwrap_or(peer.created_at);
        let mut stored = peer.clone();
        stored.created_at = created_at;
        peers.insert(key, stored);
        Ok(())
    }

    async fn delete_peer(&self, file_id: i64, user_id: i64, ip: &str) -> Result<(), StorageError>
    {
        self.peers.write().remove(&(file_id, user_id, ip.to_string()));
        Ok(())
    }

    async fn save_announce_log(&self, log: &AnnounceLog) -> Result<(), StorageError>
    {
        self.announce_log.write().push(log.clone());
        Ok(())
    }

    async fn save_scrape_log(&self, log: &ScrapeLog) -> Result<(), StorageError>
    {
        self.scrape_log.write().push(log.clone());
        Ok(())
    }

    async fn load_user(&self, id: i64) -> Result<Option<User>, StorageError>
    {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn load_user_by_passkey(&self, passkey: &str) -> Result<Option<User>, StorageError>
    {
        Ok(self.users.read().values().find(|user| user.passkey == passkey).cloned())
    }

    async fn save_user(&self, user: &User) -> Result<User, StorageError>
    {
        let mut users = self.users.write();
        let mut stored = user.clone();
        if stored.id == 0 {
            if users.values().any(|existing| existing.passkey == user.passkey) {
                return Err(StorageError::Corrupt(String::from("duplicate passkey")));
            }
            stored.id = self.next_id();
        }
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_user(&self, id: i64) -> Result<(), StorageError>
    {
        self.users.write().remove(&id);
        Ok(())
    }

    async fn load_whitelist(&self) -> Result<Vec<WhitelistEntry>, StorageError>
    {
        Ok(self.whitelist.read().values().cloned().collect())
    }

    async fn save_whitelist(&self, entry: &WhitelistEntry) -> Result<(), StorageError>
    {
        self.whitelist.write().insert(entry.client_prefix.clone(), entry.clone());
        Ok(())
    }

    async fn delete_whitelist(&self, client_prefix: &str) -> Result<(), StorageError>
    {
        self.whitelist.write().remove(client_prefix);
        Ok(())
    }

    async fn count_seeders(&self, file_id: i64) -> Result<u64, StorageError>
    {
        Ok(self.count_peers(file_id, |peer| peer.active && peer.left == 0))
    }

    async fn count_leechers(&self, file_id: i64) -> Result<u64, StorageError>
    {
        Ok(self.count_peers(file_id, |peer| peer.active && peer.left > 0))
    }

    async fn count_completed(&self, file_id: i64) -> Result<u64, StorageError>
    {
        Ok(self.count_peers(file_id, |peer| peer.completed))
    }

    async fn peer_list_by_info_hash(&self, info_hash: &str, limit: u64) -> Result<Vec<SocketAddr>, StorageError>
    {
        let file_id = match self.load_file_by_info_hash(info_hash).await? {
            None => { return Ok(Vec::new()); }
            Some(file) => file.id
        };
        let mut active: Vec<FileUserRecord> = self.peers.read().values()
            .filter(|peer| peer.file_id == file_id && peer.active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
        active.into_iter()
            .take(limit as usize)
            .map(|peer| {
                IpAddr::from_str(&peer.ip)
                    .map(|ip| SocketAddr::new(ip, peer.port))
                    .map_err(|_| StorageError::Corrupt(format!("invalid peer address {}", peer.ip)))
            })
            .collect()
    }

    async fn inactive_peers(&self, file_id: i64, older_than: i64) -> Result<Vec<FileUserRecord>, StorageError>
    {
        Ok(self.peers.read().values()
            .filter(|peer| peer.file_id == file_id && peer.active && peer.last_seen < older_than)
            .cloned()
            .collect())
    }

    async fn mark_peers_inactive(&self, peers: &[FileUserRecord]) -> Result<u64, StorageError>
    {
        let mut stored = self.peers.write();
        let mut affected = 0u64;
        for peer in peers {
            if let Some(existing) = stored.get_mut(&(peer.file_id, peer.user_id, peer.ip.clone()))
                && existing.active
                && existing.last_seen == peer.last_seen
            {
                existing.active = false;
                affected += 1;
            }
        }
        Ok(affected)
    }
}
