//! SQL text and row decoding shared by the SQLite and MySQL connectors.
//!
//! Both engines accept backtick quoted identifiers and `?` placeholders, so a
//! query only differs where the dialects do (DDL and upserts).

use sqlx::{ColumnIndex, Decode, Row, Type};
use crate::database::enums::sql_dialect::SqlDialect;
use crate::database::enums::storage_error::StorageError;
use crate::tracker::structs::file_user_record::FileUserRecord;
use crate::tracker::structs::torrent_file::TorrentFile;
use crate::tracker::structs::user::User;
use crate::tracker::structs::whitelist_entry::WhitelistEntry;

pub const TABLE_FILES: &str = "files";
pub const TABLE_FILES_USERS: &str = "files_users";
pub const TABLE_ANNOUNCE_LOG: &str = "announce_log";
pub const TABLE_SCRAPE_LOG: &str = "scrape_log";
pub const TABLE_USERS: &str = "users";
pub const TABLE_WHITELIST: &str = "whitelist";

const FILE_COLUMNS: &[&str] = &["id", "info_hash", "verified", "created_at", "updated_at"];
const PEER_COLUMNS: &[&str] = &["file_id", "user_id", "ip", "port", "active", "completed", "announced", "uploaded", "downloaded", "left", "last_seen", "created_at"];
const PEER_KEY: &[&str] = &["file_id", "user_id", "ip"];
const ANNOUNCE_LOG_COLUMNS: &[&str] = &["info_hash", "peer_id", "ip", "port", "uploaded", "downloaded", "left", "event", "key", "client", "user_id", "created_at"];
const SCRAPE_LOG_COLUMNS: &[&str] = &["info_hash", "user_id", "ip", "created_at"];
const USER_COLUMNS: &[&str] = &["id", "passkey", "enabled", "created_at"];

pub fn quote_identifier(engine: SqlDialect, identifier: &str) -> String {
    match engine {
        SqlDialect::Sqlite | SqlDialect::MySql => format!("`{}`", identifier),
    }
}

fn column_list(engine: SqlDialect, columns: &[&str]) -> String {
    columns.iter().map(|column| quote_identifier(engine, column)).collect::<Vec<String>>().join(", ")
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

pub fn upsert_conflict_clause(engine: SqlDialect, conflict_columns: &[&str], update_columns: &[&str]) -> String {
    match engine {
        SqlDialect::Sqlite => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=excluded.{}", quoted, quoted)
                })
                .collect();
            format!(
                "ON CONFLICT ({}) DO UPDATE SET {}",
                column_list(engine, conflict_columns),
                updates.join(", ")
            )
        }
        SqlDialect::MySql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=VALUES({})", quoted, quoted)
                })
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
        }
    }
}

pub fn limit(engine: SqlDialect, length: u64) -> String {
    match engine {
        SqlDialect::Sqlite | SqlDialect::MySql => format!("LIMIT {}", length),
    }
}

/// `(table, statement)` pairs creating the schema, in dependency order.
pub fn create_table_queries(engine: SqlDialect) -> Vec<(&'static str, String)> {
    match engine {
        SqlDialect::MySql => vec![
            (TABLE_FILES, String::from("CREATE TABLE IF NOT EXISTS `files` (`id` BIGINT NOT NULL AUTO_INCREMENT, `info_hash` VARCHAR(128) NOT NULL, `verified` TINYINT(1) NOT NULL DEFAULT 0, `created_at` BIGINT NOT NULL, `updated_at` BIGINT NOT NULL, PRIMARY KEY (`id`), UNIQUE KEY `info_hash` (`info_hash`)) COLLATE='utf8mb4_general_ci'")),
            (TABLE_FILES_USERS, String::from("CREATE TABLE IF NOT EXISTS `files_users` (`file_id` BIGINT NOT NULL, `user_id` BIGINT NOT NULL, `ip` VARCHAR(45) NOT NULL, `port` INT NOT NULL, `active` TINYINT(1) NOT NULL DEFAULT 1, `completed` TINYINT(1) NOT NULL DEFAULT 0, `announced` BIGINT NOT NULL DEFAULT 0, `uploaded` BIGINT NOT NULL DEFAULT 0, `downloaded` BIGINT NOT NULL DEFAULT 0, `left` BIGINT NOT NULL DEFAULT 0, `last_seen` BIGINT NOT NULL, `created_at` BIGINT NOT NULL, PRIMARY KEY (`file_id`, `user_id`, `ip`), KEY `file_active` (`file_id`, `active`)) COLLATE='utf8mb4_general_ci'")),
            (TABLE_ANNOUNCE_LOG, String::from("CREATE TABLE IF NOT EXISTS `announce_log` (`id` BIGINT NOT NULL AUTO_INCREMENT, `info_hash` VARCHAR(128) NOT NULL, `peer_id` VARCHAR(40) NOT NULL, `ip` VARCHAR(45) NOT NULL, `port` INT NOT NULL, `uploaded` BIGINT NOT NULL, `downloaded` BIGINT NOT NULL, `left` BIGINT NOT NULL, `event` VARCHAR(16) NOT NULL, `key` VARCHAR(64) NOT NULL, `client` VARCHAR(255) NOT NULL, `user_id` BIGINT NOT NULL, `created_at` BIGINT NOT NULL, PRIMARY KEY (`id`)) COLLATE='utf8mb4_general_ci'")),
            (TABLE_SCRAPE_LOG, String::from("CREATE TABLE IF NOT EXISTS `scrape_log` (`id` BIGINT NOT NULL AUTO_INCREMENT, `info_hash` VARCHAR(128) NOT NULL, `user_id` BIGINT NOT NULL, `ip` VARCHAR(45) NOT NULL, `created_at` BIGINT NOT NULL, PRIMARY KEY (`id`)) COLLATE='utf8mb4_general_ci'")),
            (TABLE_USERS, String::from("CREATE TABLE IF NOT EXISTS `users` (`id` BIGINT NOT NULL AUTO_INCREMENT, `passkey` CHAR(40) NOT NULL, `enabled` TINYINT(1) NOT NULL DEFAULT 1, `created_at` BIGINT NOT NULL, PRIMARY KEY (`id`), UNIQUE KEY `passkey` (`passkey`)) COLLATE='utf8mb4_general_ci'")),
            (TABLE_WHITELIST, String::from("CREATE TABLE IF NOT EXISTS `whitelist` (`client_prefix` VARCHAR(64) NOT NULL, `name` VARCHAR(255) NOT NULL DEFAULT '', PRIMARY KEY (`client_prefix`)) COLLATE='utf8mb4_general_ci'")),
        ],
        SqlDialect::Sqlite => vec![
            (TABLE_FILES, String::from("CREATE TABLE IF NOT EXISTS `files` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `info_hash` TEXT NOT NULL UNIQUE, `verified` INTEGER NOT NULL DEFAULT 0, `created_at` INTEGER NOT NULL, `updated_at` INTEGER NOT NULL)")),
            (TABLE_FILES_USERS, String::from("CREATE TABLE IF NOT EXISTS `files_users` (`file_id` INTEGER NOT NULL, `user_id` INTEGER NOT NULL, `ip` TEXT NOT NULL, `port` INTEGER NOT NULL, `active` INTEGER NOT NULL DEFAULT 1, `completed` INTEGER NOT NULL DEFAULT 0, `announced` INTEGER NOT NULL DEFAULT 0, `uploaded` INTEGER NOT NULL DEFAULT 0, `downloaded` INTEGER NOT NULL DEFAULT 0, `left` INTEGER NOT NULL DEFAULT 0, `last_seen` INTEGER NOT NULL, `created_at` INTEGER NOT NULL, PRIMARY KEY (`file_id`, `user_id`, `ip`))")),
            (TABLE_FILES_USERS, String::from("CREATE INDEX IF NOT EXISTS `files_users_file_active` ON `files_users` (`file_id`, `active`)")),
            (TABLE_ANNOUNCE_LOG, String::from("CREATE TABLE IF NOT EXISTS `announce_log` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `info_hash` TEXT NOT NULL, `peer_id` TEXT NOT NULL, `ip` TEXT NOT NULL, `port` INTEGER NOT NULL, `uploaded` INTEGER NOT NULL, `downloaded` INTEGER NOT NULL, `left` INTEGER NOT NULL, `event` TEXT NOT NULL, `key` TEXT NOT NULL, `client` TEXT NOT NULL, `user_id` INTEGER NOT NULL, `created_at` INTEGER NOT NULL)")),
            (TABLE_SCRAPE_LOG, String::from("CREATE TABLE IF NOT EXISTS `scrape_log` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `info_hash` TEXT NOT NULL, `user_id` INTEGER NOT NULL, `ip` TEXT NOT NULL, `created_at` INTEGER NOT NULL)")),
            (TABLE_USERS, String::from("CREATE TABLE IF NOT EXISTS `users` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `passkey` TEXT NOT NULL UNIQUE, `enabled` INTEGER NOT NULL DEFAULT 1, `created_at` INTEGER NOT NULL)")),
            (TABLE_WHITELIST, String::from("CREATE TABLE IF NOT EXISTS `whitelist` (`client_prefix` TEXT PRIMARY KEY NOT NULL, `name` TEXT NOT NULL DEFAULT '')")),
        ],
    }
}

pub fn select_file_query(engine: SqlDialect, key_column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(engine, FILE_COLUMNS),
        quote_identifier(engine, TABLE_FILES),
        quote_identifier(engine, key_column)
    )
}

pub fn select_files_query(engine: SqlDialect) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(engine, FILE_COLUMNS),
        quote_identifier(engine, TABLE_FILES),
        quote_identifier(engine, "id")
    )
}

/// Binds: info_hash, verified, created_at, updated_at.
pub fn insert_file_query(engine: SqlDialect) -> String {
    let columns = &FILE_COLUMNS[1..];
    format!(
        "INSERT INTO {} ({}) VALUES ({}) {}",
        quote_identifier(engine, TABLE_FILES),
        column_list(engine, columns),
        placeholders(columns.len()),
        upsert_conflict_clause(engine, &["info_hash"], &["updated_at"])
    )
}

/// Binds: verified, updated_at, id.
pub fn update_file_query(engine: SqlDialect) -> String {
    format!(
        "UPDATE {} SET {} = ?, {} = ? WHERE {} = ?",
        quote_identifier(engine, TABLE_FILES),
        quote_identifier(engine, "verified"),
        quote_identifier(engine, "updated_at"),
        quote_identifier(engine, "id")
    )
}

pub fn delete_by_query(engine: SqlDialect, table: &str, key_columns: &[&str]) -> String {
    let conditions: Vec<String> = key_columns.iter().map(|column| format!("{} = ?", quote_identifier(engine, column))).collect();
    format!(
        "DELETE FROM {} WHERE {}",
        quote_identifier(engine, table),
        conditions.join(" AND ")
    )
}

/// Binds: file_id, user_id, ip.
pub fn select_peer_query(engine: SqlDialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ? AND {} = ? AND {} = ?",
        column_list(engine, PEER_COLUMNS),
        quote_identifier(engine, TABLE_FILES_USERS),
        quote_identifier(engine, "file_id"),
        quote_identifier(engine, "user_id"),
        quote_identifier(engine, "ip")
    )
}

/// Binds every column of `FileUserRecord` in declaration order.
pub fn upsert_peer_query(engine: SqlDialect) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) {}",
        quote_identifier(engine, TABLE_FILES_USERS),
        column_list(engine, PEER_COLUMNS),
        placeholders(PEER_COLUMNS.len()),
        upsert_conflict_clause(engine, PEER_KEY, &PEER_COLUMNS[3..11])
    )
}

pub fn peer_key_columns() -> &'static [&'static str] {
    PEER_KEY
}

/// Binds every column of `AnnounceLog` in declaration order.
pub fn insert_announce_log_query(engine: SqlDialect) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(engine, TABLE_ANNOUNCE_LOG),
        column_list(engine, ANNOUNCE_LOG_COLUMNS),
        placeholders(ANNOUNCE_LOG_COLUMNS.len())
    )
}

/// Binds every column of `ScrapeLog` in declaration order.
pub fn insert_scrape_log_query(engine: SqlDialect) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(engine, TABLE_SCRAPE_LOG),
        column_list(engine, SCRAPE_LOG_COLUMNS),
        placeholders(SCRAPE_LOG_COLUMNS.len())
    )
}

pub fn select_user_query(engine: SqlDialect, key_column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(engine, USER_COLUMNS),
        quote_identifier(engine, TABLE_USERS),
        quote_identifier(engine, key_column)
    )
}

/// Binds: passkey, enabled, created_at.
pub fn insert_user_query(engine: SqlDialect) -> String {
    let columns = &USER_COLUMNS[1..];
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(engine, TABLE_USERS),
        column_list(engine, columns),
        placeholders(columns.len())
    )
}

/// Binds: passkey, enabled, id.
pub fn update_user_query(engine: SqlDialect) -> String {
    format!(
        "UPDATE {} SET {} = ?, {} = ? WHERE {} = ?",
        quote_identifier(engine, TABLE_USERS),
        quote_identifier(engine, "passkey"),
        quote_identifier(engine, "enabled"),
        quote_identifier(engine, "id")
    )
}

pub fn select_whitelist_query(engine: SqlDialect) -> String {
    format!(
        "SELECT {}, {} FROM {} ORDER BY {}",
        quote_identifier(engine, "client_prefix"),
        quote_identifier(engine, "name"),
        quote_identifier(engine, TABLE_WHITELIST),
        quote_identifier(engine, "client_prefix")
    )
}

/// Binds: client_prefix, name.
pub fn upsert_whitelist_query(engine: SqlDialect) -> String {
    format!(
        "INSERT INTO {} ({}, {}) VALUES (?, ?) {}",
        quote_identifier(engine, TABLE_WHITELIST),
        quote_identifier(engine, "client_prefix"),
        quote_identifier(engine, "name"),
        upsert_conflict_clause(engine, &["client_prefix"], &["name"])
    )
}

/// Binds: file_id. The count is returned as `total`.
pub fn count_peers_query(engine: SqlDialect, condition: &str) -> String {
    format!(
        "SELECT COUNT(*) AS {} FROM {} WHERE {} = ? AND {}",
        quote_identifier(engine, "total"),
        quote_identifier(engine, TABLE_FILES_USERS),
        quote_identifier(engine, "file_id"),
        condition
    )
}

pub fn seeders_condition(engine: SqlDialect) -> String {
    format!("{} = 1 AND {} = 0", quote_identifier(engine, "active"), quote_identifier(engine, "left"))
}

pub fn leechers_condition(engine: SqlDialect) -> String {
    format!("{} = 1 AND {} > 0", quote_identifier(engine, "active"), quote_identifier(engine, "left"))
}

pub fn completed_condition(engine: SqlDialect) -> String {
    format!("{} = 1", quote_identifier(engine, "completed"))
}

/// Binds: info_hash.
pub fn peer_list_query(engine: SqlDialect, length: u64) -> String {
    format!(
        "SELECT fu.{ip}, fu.{port} FROM {peers} fu INNER JOIN {files} f ON f.{id} = fu.{file_id} WHERE f.{info_hash} = ? AND fu.{active} = 1 ORDER BY fu.{last_seen} DESC {limit_clause}",
        ip = quote_identifier(engine, "ip"),
        port = quote_identifier(engine, "port"),
        peers = quote_identifier(engine, TABLE_FILES_USERS),
        files = quote_identifier(engine, TABLE_FILES),
        id = quote_identifier(engine, "id"),
        file_id = quote_identifier(engine, "file_id"),
        info_hash = quote_identifier(engine, "info_hash"),
        active = quote_identifier(engine, "active"),
        last_seen = quote_identifier(engine, "last_seen"),
        limit_clause = limit(engine, length)
    )
}

/// Binds: file_id, older_than.
pub fn inactive_peers_query(engine: SqlDialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ? AND {} = 1 AND {} < ?",
        column_list(engine, PEER_COLUMNS),
        quote_identifier(engine, TABLE_FILES_USERS),
        quote_identifier(engine, "file_id"),
        quote_identifier(engine, "active"),
        quote_identifier(engine, "last_seen")
    )
}

/// Binds: file_id, user_id, ip, last_seen.
pub fn mark_peer_inactive_query(engine: SqlDialect) -> String {
    format!(
        "UPDATE {} SET {active} = 0 WHERE {} = ? AND {} = ? AND {} = ? AND {} = ? AND {active} = 1",
        quote_identifier(engine, TABLE_FILES_USERS),
        quote_identifier(engine, "file_id"),
        quote_identifier(engine, "user_id"),
        quote_identifier(engine, "ip"),
        quote_identifier(engine, "last_seen"),
        active = quote_identifier(engine, "active")
    )
}

fn non_negative(value: i64, column: &str) -> Result<u64, StorageError> {
    u64::try_from(value).map_err(|_| StorageError::Corrupt(format!("negative {column}: {value}")))
}

pub fn torrent_file_from_row<R>(row: &R) -> Result<TorrentFile, StorageError>
where
    R: Row,
    for<'c> &'c str: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> bool: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
{
    Ok(TorrentFile {
        id: row.try_get("id")?,
        info_hash: row.try_get("info_hash")?,
        verified: row.try_get("verified")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub fn file_user_record_from_row<R>(row: &R) -> Result<FileUserRecord, StorageError>
where
    R: Row,
    for<'c> &'c str: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> bool: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
{
    let port: i64 = row.try_get("port")?;
    Ok(FileUserRecord {
        file_id: row.try_get("file_id")?,
        user_id: row.try_get("user_id")?,
        ip: row.try_get("ip")?,
        port: u16::try_from(port).map_err(|_| StorageError::Corrupt(format!("port out of range: {port}")))?,
        active: row.try_get("active")?,
        completed: row.try_get("completed")?,
        announced: non_negative(row.try_get("announced")?, "announced")?,
        uploaded: non_negative(row.try_get("uploaded")?, "uploaded")?,
        downloaded: non_negative(row.try_get("downloaded")?, "downloaded")?,
        left: non_negative(row.try_get("left")?, "left")?,
        last_seen: row.try_get("last_seen")?,
        created_at: row.try_get("created_at")?,
    })
}

pub fn user_from_row<R>(row: &R) -> Result<User, StorageError>
where
    R: Row,
    for<'c> &'c str: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> bool: Decode<'r, R::Database> + Type<R::Database>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
{
    Ok(User {
        id: row.try_get("id")?,
        passkey: row.try_get("passkey")?,
        enabled: row.try_get("enabled")?,
        created_at: row.try_get("created_at")?,
    })
}

pub fn whitelist_entry_from_row<R>(row: &R) -> Result<WhitelistEntry, StorageError>
where
    R: Row,
    for<'c> &'c str: ColumnIndex<R>,
    for<'r> String: Decode<'r, R::Database> + Type<R::Database>,
{
    Ok(WhitelistEntry {
        client_prefix: row.try_get("client_prefix")?,
        name: row.try_get("name")?,
    })
}

pub fn total_from_row<R>(row: &R) -> Result<u64, StorageError>
where
    R: Row,
    for<'c> &'c str: ColumnIndex<R>,
    for<'r> i64: Decode<'r, R::Database> + Type<R::Database>,
{
    non_negative(row.try_get("total")?, "total")
}
