#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use rand::RngExt;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::database::enums::database_drivers::DatabaseDrivers;
use swarm_tracker::database::structs::database_connector::DatabaseConnector;
use swarm_tracker::database::structs::database_connector_memory::DatabaseConnectorMemory;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::torrent_file::TorrentFile;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.database.engine = DatabaseDrivers::memory;
    config.database.path = String::new();
    config
}

/// A tracker over the in-memory back-end. The back-end is returned as well so
/// tests can look at the announce and scrape logs.
pub fn create_test_tracker_with(configure: impl FnOnce(&mut Configuration)) -> (TestTracker, Arc<DatabaseConnectorMemory>) {
    let mut config = create_test_config();
    configure(&mut config);
    let memory = Arc::new(DatabaseConnectorMemory::new());
    let connector = DatabaseConnector::from_backend(DatabaseDrivers::memory, memory.clone());
    (Arc::new(TorrentTracker::with_connector(Arc::new(config), connector)), memory)
}

pub fn create_test_tracker() -> TestTracker {
    create_test_tracker_with(|_| {}).0
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub async fn register_file(tracker: &TorrentTracker, info_hash: InfoHash, verified: bool) -> TorrentFile {
    tracker.sqlx.save_file(&TorrentFile {
        id: 0,
        info_hash: info_hash.to_string(),
        verified,
        created_at: 0,
        updated_at: 0,
    }).await.expect("storing a file in memory works")
}

/// Announce query as the HTTP adapter hands it to the tracker.
pub fn announce_query(info_hash: InfoHash, ip: &str, port: u16, uploaded: u64, downloaded: u64, left: u64, event: Option<&str>) -> HashMap<String, Vec<Vec<u8>>> {
    let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    query.insert(String::from("info_hash"), vec![info_hash.0.to_vec()]);
    query.insert(String::from("ip"), vec![ip.as_bytes().to_vec()]);
    query.insert(String::from("port"), vec![port.to_string().into_bytes()]);
    query.insert(String::from("uploaded"), vec![uploaded.to_string().into_bytes()]);
    query.insert(String::from("downloaded"), vec![downloaded.to_string().into_bytes()]);
    query.insert(String::from("left"), vec![left.to_string().into_bytes()]);
    if let Some(event) = event {
        query.insert(String::from("event"), vec![event.as_bytes().to_vec()]);
    }
    query
}

pub fn scrape_query(info_hashes: &[InfoHash]) -> HashMap<String, Vec<Vec<u8>>> {
    let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    query.insert(String::from("info_hash"), info_hashes.iter().map(|info_hash| info_hash.0.to_vec()).collect());
    query
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
