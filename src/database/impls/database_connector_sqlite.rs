use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite};
use crate::database::enums::sql_dialect::SqlDialect;
use crate::database::enums::storage_error::StorageError;
use crate::database::helpers::{
    completed_condition, count_peers_query, create_table_queries, delete_by_query,
    file_user_record_from_row, inactive_peers_query, insert_announce_log_query,
    insert_file_query, insert_scrape_log_query, insert_user_query, leechers_condition,
    mark_peer_inactive_query, peer_key_columns, peer_list_query, seeders_condition,
    select_file_query, select_files_query, select_peer_query, select_user_query,
    select_whitelist_query, torrent_file_from_row, total_from_row, update_file_query,
    update_user_query, upsert_peer_query, upsert_whitelist_query, user_from_row,
    whitelist_entry_from_row, TABLE_FILES, TABLE_FILES_USERS, TABLE_USERS, TABLE_WHITELIST,
};
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracker::structs::announce_log::AnnounceLog;
use crate::tracker::structs::file_user_record::FileUserRecord;
use crate::tracker::structs::scrape_log::ScrapeLog;
use crate::tracker::structs::torrent_file::TorrentFile;
use crate::tracker::structs::user::User;
use crate::tracker::structs::whitelist_entry::WhitelistEntry;

const ENGINE: SqlDialect = SqlDialect::Sqlite;
const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Sqlite>, Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn connect(dsl: &str) -> Result<DatabaseConnectorSQLite, StorageError> {
        let pool = DatabaseConnectorSQLite::create(dsl).await?;
        info!("{} Connected to {}", LOG_PREFIX, dsl);
        Ok(DatabaseConnectorSQLite { pool })
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    async fn create_tables(&self) -> Result<(), StorageError>
    {
        info!("[BOOT] Database creation triggered for SQLite.");
        info!("[BOOT SQLite] Setting the PRAGMA config...");
        sqlx::query("PRAGMA temp_store = memory;").execute(&self.pool).await?;
        sqlx::query("PRAGMA journal_mode = WAL;").execute(&self.pool).await?;
        for (table, query) in create_table_queries(ENGINE) {
            info!("[BOOT SQLite] Creating table {}", table);
            sqlx::query(&query).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn load_file(&self, id: i64) -> Result<Option<TorrentFile>, StorageError>
    {
        let row = sqlx::query(&select_file_query(ENGINE, "id"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(torrent_file_from_row).transpose()
    }

    async fn load_file_by_info_hash(&self, info_hash: &str) -> Result<Option<TorrentFile>, StorageError>
    {
        let row = sqlx::query(&select_file_query(ENGINE, "info_hash"))
            .bind(info_hash)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(torrent_file_from_row).transpose()
    }

    async fn load_files(&self) -> Result<Vec<TorrentFile>, StorageError>
    {
        let rows = sqlx::query(&select_files_query(ENGINE))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(torrent_file_from_row).collect()
    }

    async fn save_file(&self, file: &TorrentFile) -> Result<TorrentFile, StorageError>
    {
        if file.id == 0 {
            sqlx::query(&insert_file_query(ENGINE))
                .bind(&file.info_hash)
                .bind(file.verified)
                .bind(file.created_at)
                .bind(file.updated_at)
                .execute(&self.pool)
                .await?;
            return self.load_file_by_info_hash(&file.info_hash).await?
                .ok_or_else(|| StorageError::Corrupt(format!("file {} vanished after insert", file.info_hash)));
        }
        sqlx::query(&update_file_query(ENGINE))
            .bind(file.verified)
            .bind(file.updated_at)
            .bind(file.id)
            .execute(&self.pool)
            .await?;
        Ok(file.clone())
    }

    async fn delete_file(&self, id: i64) -> Result<(), StorageError>
    {
        let mut transaction = self.pool.begin().await?;
        sqlx::query(&delete_by_query(ENGINE, TABLE_FILES_USERS, &["file_id"]))
            .bind(id)
            .execute(&mut *transaction)
            .await?;
        sqlx::query(&delete_by_query(ENGINE, TABLE_FILES, &["id"]))
            .bind(id)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        Ok(())
    }

    async fn load_peer(&self, file_id: i64, user_id: i64, ip: &str) -> Result<Option<FileUserRecord>, StorageError>
    {
        let row = sqlx::query(&select_peer_query(ENGINE))
            .bind(file_id)
            .bind(user_id)
            .bind(ip)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(file_user_record_from_row).transpose()
    }

    async fn save_peer(&self, peer: &FileUserRecord) -> Result<(), StorageError>
    {
        sqlx::query(&upsert_peer_query(ENGINE))
            .bind(peer.file_id)
            .bind(peer.user_id)
            .bind(&peer.ip)
            .bind(peer.port as i64)
            .bind(peer.active)
            .bind(peer.completed)
            .bind(peer.announced as i64)
            .bind(peer.uploaded as i64)
            .bind(peer.downloaded as i64)
            .bind(peer.left as i64)
            .bind(peer.last_seen)
            .bind(peer.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_peer(&self, file_id: i64, user_id: i64, ip: &str) -> Result<(), StorageError>
    {
        sqlx::query(&delete_by_query(ENGINE, TABLE_FILES_USERS, peer_key_columns()))
            .bind(file_id)
            .bind(user_id)
            .bind(ip)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn save_announce_log(&self, log: &AnnounceLog) -> Result<(), StorageError>
    {
        sqlx::query(&insert_announce_log_query(ENGINE))
            .bind(&log.info_hash)
            .bind(&log.peer_id)
            .bind(&log.ip)
            .bind(log.port as i64)
            .bind(log.uploaded as i64)
            .bind(log.downloaded as i64)
            .bind(log.left as i64)
            .bind(log.event.as_str())
            .bind(&log.key)
            .bind(&log.client)
            .bind(log.user_id)
            .bind(log.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn save_scrape_log(&self, log: &ScrapeLog) -> Result<(), StorageError>
    {
        sqlx::query(&insert_scrape_log_query(ENGINE))
            .bind(&log.info_hash)
            .bind(log.user_id)
            .bind(&log.ip)
            .bind(log.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn load_user(&self, id: i64) -> Result<Option<User>, StorageError>
    {
        let row = sqlx::query(&select_user_query(ENGINE, "id"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn load_user_by_passkey(&self, passkey: &str) -> Result<Option<User>, StorageError>
    {
        let row = sqlx::query(&select_user_query(ENGINE, "passkey"))
            .bind(passkey)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn save_user(&self, user: &User) -> Result<User, StorageError>
    {
        if user.id == 0 {
            sqlx::query(&insert_user_query(ENGINE))
                .bind(&user.passkey)
                .bind(user.enabled)
                .bind(user.created_at)
                .execute(&self.pool)
                .await?;
            return self.load_user_by_passkey(&user.passkey).await?
                .ok_or_else(|| StorageError::Corrupt(String::from("user vanished after insert")));
        }
        sqlx::query(&update_user_query(ENGINE))
            .bind(&user.passkey)
            .bind(user.enabled)
            .bind(user.id)
            .execute(&self.pool)
            .await?;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i64) -> Result<(), StorageError>
    {
        sqlx::query(&delete_by_query(ENGINE, TABLE_USERS, &["id"]))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn load_whitelist(&self) -> Result<Vec<WhitelistEntry>, StorageError>
    {
        let rows = sqlx::query(&select_whitelist_query(ENGINE))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(whitelist_entry_from_row).collect()
    }

    async fn save_whitelist(&self, entry: &WhitelistEntry) -> Result<(), StorageError>
    {
        sqlx::query(&upsert_whitelist_query(ENGINE))
            .bind(&entry.client_prefix)
            .bind(&entry.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_whitelist(&self, client_prefix: &str) -> Result<(), StorageError>
    {
        sqlx::query(&delete_by_query(ENGINE, TABLE_WHITELIST, &["client_prefix"]))
            .bind(client_prefix)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_seeders(&self, file_id: i64) -> Result<u64, StorageError>
    {
        let row = sqlx::query(&count_peers_query(ENGINE, &seeders_condition(ENGINE)))
            .bind(file_id)
            .fetch_one(&self.pool)
            .await?;
        total_from_row(&row)
    }

    async fn count_leechers(&self, file_id: i64) -> Result<u64, StorageError>
    {
        let row = sqlx::query(&count_peers_query(ENGINE, &leechers_condition(ENGINE)))
            .bind(file_id)
            .fetch_one(&self.pool)
            .await?;
        total_from_row(&row)
    }

    async fn count_completed(&self, file_id: i64) -> Result<u64, StorageError>
    {
        let row = sqlx::query(&count_peers_query(ENGINE, &completed_condition(ENGINE)))
            .bind(file_id)
            .fetch_one(&self.pool)
            .await?;
        total_from_row(&row)
    }

    async fn peer_list_by_info_hash(&self, info_hash: &str, limit: u64) -> Result<Vec<SocketAddr>, StorageError>
    {
        let rows = sqlx::query(&peer_list_query(ENGINE, limit))
            .bind(info_hash)
            .fetch_all(&self.pool)
            .await?;
        let mut peers = Vec::with_capacity(rows.len());
        for row in rows {
            let ip: String = row.try_get("ip")?;
            let port: i64 = row.try_get("port")?;
            match (IpAddr::from_str(&ip), u16::try_from(port)) {
                (Ok(ip), Ok(port)) => peers.push(SocketAddr::new(ip, port)),
                _ => return Err(StorageError::Corrupt(format!("{} invalid peer address {}:{}", LOG_PREFIX, ip, port)))
            }
        }
        Ok(peers)
    }

    async fn inactive_peers(&self, file_id: i64, older_than: i64) -> Result<Vec<FileUserRecord>, StorageError>
    {
        let rows = sqlx::query(&inactive_peers_query(ENGINE))
            .bind(file_id)
            .bind(older_than)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(file_user_record_from_row).collect()
    }

    async fn mark_peers_inactive(&self, peers: &[FileUserRecord]) -> Result<u64, StorageError>
    {
        if peers.is_empty() {
            return Ok(0);
        }
        let query = mark_peer_inactive_query(ENGINE);
        let mut affected = 0u64;
        let mut transaction = self.pool.begin().await?;
        for peer in peers {
            affected += sqlx::query(&query)
                .bind(peer.file_id)
                .bind(peer.user_id)
                .bind(&peer.ip)
                .bind(peer.last_seen)
                .execute(&mut *transaction)
                .await?
                .rows_affected();
        }
        transaction.commit().await?;
        Ok(affected)
    }
}
