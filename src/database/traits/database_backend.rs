use std::net::SocketAddr;
use async_trait::async_trait;
use crate::database::enums::storage_error::StorageError;
use crate::tracker::structs::announce_log::AnnounceLog;
use crate::tracker::structs::file_user_record::FileUserRecord;
use crate::tracker::structs::scrape_log::ScrapeLog;
use crate::tracker::structs::torrent_file::TorrentFile;
use crate::tracker::structs::user::User;
use crate::tracker::structs::whitelist_entry::WhitelistEntry;

#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// Creates the schema if it does not exist yet.
    async fn create_tables(&self) -> Result<(), StorageError>;

    async fn load_file(&self, id: i64) -> Result<Option<TorrentFile>, StorageError>;

    async fn load_file_by_info_hash(&self, info_hash: &str) -> Result<Option<TorrentFile>, StorageError>;

    async fn load_files(&self) -> Result<Vec<TorrentFile>, StorageError>;

    /// Inserts when `file.id == 0` (an existing row with the same info hash
    /// keeps its `verified` flag), otherwise updates by id. Returns the stored row.
    async fn save_file(&self, file: &TorrentFile) -> Result<TorrentFile, StorageError>;

    async fn delete_file(&self, id: i64) -> Result<(), StorageError>;

    async fn load_peer(&self, file_id: i64, user_id: i64, ip: &str) -> Result<Option<FileUserRecord>, StorageError>;

    /// Insert or replace on `(file_id, user_id, ip)`.
    async fn save_peer(&self, peer: &FileUserRecord) -> Result<(), StorageError>;

    async fn delete_peer(&self, file_id: i64, user_id: i64, ip: &str) -> Result<(), StorageError>;

    async fn save_announce_log(&self, log: &AnnounceLog) -> Result<(), StorageError>;

    async fn save_scrape_log(&self, log: &ScrapeLog) -> Result<(), StorageError>;

    async fn load_user(&self, id: i64) -> Result<Option<User>, StorageError>;

    async fn load_user_by_passkey(&self, passkey: &str) -> Result<Option<User>, StorageError>;

    /// Inserts when `user.id == 0`, otherwise updates by id. Returns the stored row.
    async fn save_user(&self, user: &User) -> Result<User, StorageError>;

    async fn delete_user(&self, id: i64) -> Result<(), StorageError>;

    async fn load_whitelist(&self) -> Result<Vec<WhitelistEntry>, StorageError>;

    async fn save_whitelist(&self, entry: &WhitelistEntry) -> Result<(), StorageError>;

    async fn delete_whitelist(&self, client_prefix: &str) -> Result<(), StorageError>;

    /// Active peers with nothing left to download.
    async fn count_seeders(&self, file_id: i64) -> Result<u64, StorageError>;

    /// Active peers still downloading.
    async fn count_leechers(&self, file_id: i64) -> Result<u64, StorageError>;

    /// Peers that have ever completed, active or not.
    async fn count_completed(&self, file_id: i64) -> Result<u64, StorageError>;

    /// Addresses of the active peers of a file, most recently seen first.
    async fn peer_list_by_info_hash(&self, info_hash: &str, limit: u64) -> Result<Vec<SocketAddr>, StorageError>;

    /// Active peers of a file whose `last_seen` is before `older_than`.
    async fn inactive_peers(&self, file_id: i64, older_than: i64) -> Result<Vec<FileUserRecord>, StorageError>;

    /// Sets `active = false` for every given peer that has not announced since
    /// it was read. Returns the number of rows changed.
    async fn mark_peers_inactive(&self, peers: &[FileUserRecord]) -> Result<u64, StorageError>;
}
