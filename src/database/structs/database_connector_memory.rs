use std::collections::BTreeMap;
use std::sync::atomic::AtomicI64;
use parking_lot::RwLock;
use crate::tracker::structs::announce_log::AnnounceLog;
use crate::tracker::structs::file_user_record::FileUserRecord;
use crate::tracker::structs::scrape_log::ScrapeLog;
use crate::tracker::structs::torrent_file::TorrentFile;
use crate::tracker::structs::user::User;
use crate::tracker::structs::whitelist_entry::WhitelistEntry;

pub type PeerKey = (i64, i64, String);

#[derive(Debug, Default)]
pub struct DatabaseConnectorMemory {
    pub(crate) files: RwLock<BTreeMap<i64, TorrentFile>>,
    pub(crate) peers: RwLock<BTreeMap<PeerKey, FileUserRecord>>,
    pub(crate) users: RwLock<BTreeMap<i64, User>>,
    pub(crate) whitelist: RwLock<BTreeMap<String, WhitelistEntry>>,
    pub(crate) announce_log: RwLock<Vec<AnnounceLog>>,
    pub(crate) scrape_log: RwLock<Vec<ScrapeLog>>,
    pub(crate) sequence: AtomicI64,
}
