#[cfg(test)]
mod tracker_tests {
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use crate::config::structs::configuration::Configuration;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::database::structs::database_connector::DatabaseConnector;
    use crate::database::structs::database_connector_memory::DatabaseConnectorMemory;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
    use crate::tracker::structs::background_tasks::BackgroundTasks;
    use crate::tracker::structs::file_user_record::FileUserRecord;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;
    use crate::tracker::structs::user::User;
    use crate::tracker::structs::whitelist_entry::WhitelistEntry;

    fn tracker_with(configure: impl FnOnce(&mut Configuration)) -> TorrentTracker {
        let mut config = Configuration::init();
        config.database.engine = DatabaseDrivers::memory;
        configure(&mut config);
        let connector = DatabaseConnector::from_backend(DatabaseDrivers::memory, Arc::new(DatabaseConnectorMemory::new()));
        TorrentTracker::with_connector(Arc::new(config), connector)
    }

    fn query(pairs: &[(&str, Vec<u8>)]) -> HashMap<String, Vec<Vec<u8>>> {
        let mut map: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
        for (key, value) in pairs {
            map.entry(key.to_string()).or_default().push(value.clone());
        }
        map
    }

    fn announce_query(extra: &[(&str, Vec<u8>)]) -> HashMap<String, Vec<Vec<u8>>> {
        let mut pairs: Vec<(&str, Vec<u8>)> = vec![
            ("info_hash", vec![0xAB; 20]),
            ("ip", b"10.0.0.1".to_vec()),
            ("port", b"6881".to_vec()),
            ("uploaded", b"10".to_vec()),
            ("downloaded", b"20".to_vec()),
            ("left", b"30".to_vec()),
        ];
        pairs.extend_from_slice(extra);
        query(&pairs)
    }

    fn request(event: AnnounceEvent, uploaded: u64, downloaded: u64, left: u64) -> AnnounceQueryRequest {
        AnnounceQueryRequest {
            info_hash: vec![1; 20],
            peer_id: Vec::new(),
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 7000,
            uploaded,
            downloaded,
            left,
            event,
            numwant: 50,
            key: String::new(),
            client: String::new(),
        }
    }

    fn stored_peer() -> FileUserRecord {
        FileUserRecord {
            file_id: 1,
            user_id: 0,
            ip: String::from("127.0.0.1"),
            port: 6881,
            active: true,
            completed: false,
            announced: 1,
            uploaded: 500,
            downloaded: 500,
            left: 100,
            last_seen: 10,
            created_at: 10,
        }
    }

    #[test]
    fn test_validate_announce_normalizes() {
        let tracker = tracker_with(|_| {});
        let request = tracker.validate_announce(&announce_query(&[("event", b"started".to_vec()), ("peer_id", b"-qB4600-abcdefghijkl".to_vec())])).unwrap();
        assert_eq!(request.info_hash, vec![0xAB; 20]);
        assert_eq!(request.ip, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!((request.port, request.uploaded, request.downloaded, request.left), (6881, 10, 20, 30));
        assert_eq!(request.event, AnnounceEvent::Started);
        assert_eq!(request.numwant, 50);
        assert_eq!(request.peer_id.len(), 20);
    }

    #[test]
    fn test_validate_announce_rejects_missing_and_invalid_fields() {
        let tracker = tracker_with(|_| {});
        for field in ["info_hash", "ip", "port", "uploaded", "downloaded", "left"] {
            let mut map = announce_query(&[]);
            map.remove(field);
            assert!(matches!(tracker.validate_announce(&map), Err(TrackerError::MalformedAnnounce)), "missing {field}");
        }

        let mut empty_hash = announce_query(&[]);
        empty_hash.insert(String::from("info_hash"), vec![Vec::new()]);
        assert!(matches!(tracker.validate_announce(&empty_hash), Err(TrackerError::MalformedAnnounce)));

        let mut oversized_hash = announce_query(&[]);
        oversized_hash.insert(String::from("info_hash"), vec![vec![0xAB; 65]]);
        assert!(matches!(tracker.validate_announce(&oversized_hash), Err(TrackerError::MalformedAnnounce)));

        let mut bad_port = announce_query(&[]);
        bad_port.insert(String::from("port"), vec![b"70000".to_vec()]);
        assert!(matches!(tracker.validate_announce(&bad_port), Err(TrackerError::MalformedAnnounce)));

        let mut bad_left = announce_query(&[]);
        bad_left.insert(String::from("left"), vec![b"-1".to_vec()]);
        assert!(matches!(tracker.validate_announce(&bad_left), Err(TrackerError::MalformedAnnounce)));
    }

    #[test]
    fn test_validate_announce_keeps_short_raw_hash() {
        let tracker = tracker_with(|_| {});
        let mut map = announce_query(&[]);
        map.insert(String::from("info_hash"), vec![vec![0xDE, 0xAD, 0xBE, 0xEF]]);
        assert_eq!(tracker.validate_announce(&map).unwrap().info_hash, vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_validate_announce_clamps_counters_to_storable_range() {
        let tracker = tracker_with(|_| {});
        let max = u64::MAX.to_string().into_bytes();
        let request = tracker.validate_announce(&announce_query(&[])).unwrap();
        assert_eq!(request.uploaded, 10);

        let mut map = announce_query(&[]);
        map.insert(String::from("uploaded"), vec![max.clone()]);
        map.insert(String::from("downloaded"), vec![max.clone()]);
        map.insert(String::from("left"), vec![max]);
        let request = tracker.validate_announce(&map).unwrap();
        assert_eq!(request.uploaded, i64::MAX as u64);
        assert_eq!(request.downloaded, i64::MAX as u64);
        assert_eq!(request.left, i64::MAX as u64);
    }

    #[test]
    fn test_numwant_default_sentinel_and_cap() {
        let tracker = tracker_with(|config| config.tracker_config.max_numwant = 30);
        let numwant = |value: &[u8]| tracker.validate_announce(&announce_query(&[("numwant", value.to_vec())])).unwrap().numwant;
        assert_eq!(numwant(b"10"), 10);
        assert_eq!(numwant(b"0"), 30);
        assert_eq!(numwant(b"4294967295"), 30);
        assert_eq!(numwant(b"1000"), 30);
        assert_eq!(tracker.validate_announce(&announce_query(&[])).unwrap().numwant, 30);
    }

    #[test]
    fn test_apply_announce_keeps_counters_monotonic() {
        let mut peer = stored_peer();
        peer.apply_announce(&request(AnnounceEvent::None, 100, 900, 400), 99);
        assert_eq!(peer.uploaded, 500, "uploaded never shrinks");
        assert_eq!(peer.downloaded, 900);
        assert_eq!(peer.left, 100, "left never grows");
        assert_eq!(peer.announced, 2);
        assert_eq!(peer.port, 7000);
        assert_eq!(peer.last_seen, 99);
        assert!(peer.active);
        assert!(!peer.completed);
    }

    #[test]
    fn test_apply_announce_events() {
        let mut peer = stored_peer();
        peer.apply_announce(&request(AnnounceEvent::Stopped, 0, 0, 50), 1);
        assert!(!peer.active);

        peer.apply_announce(&request(AnnounceEvent::Completed, 0, 0, 50), 2);
        assert!(peer.active);
        assert!(peer.completed);

        let mut seeding = stored_peer();
        seeding.apply_announce(&request(AnnounceEvent::None, 0, 0, 0), 3);
        assert!(seeding.completed, "left=0 counts as completed");
    }

    #[test]
    fn test_validate_scrape() {
        let tracker = tracker_with(|_| {});
        let request = tracker.validate_scrape(&query(&[("info_hash", vec![1; 20]), ("info_hash", vec![2; 20])]), None).unwrap();
        assert_eq!(request.info_hashes, vec![vec![1; 20], vec![2; 20]]);

        let short = tracker.validate_scrape(&query(&[("info_hash", vec![1; 20]), ("info_hash", vec![2; 3])]), None).unwrap();
        assert_eq!(short.info_hashes[1], vec![2; 3]);

        assert!(matches!(tracker.validate_scrape(&query(&[]), None), Err(TrackerError::MalformedScrape)));
        assert!(matches!(tracker.validate_scrape(&query(&[("info_hash", vec![1; 20]), ("info_hash", Vec::new())]), None), Err(TrackerError::MalformedScrape)));
    }

    #[test]
    fn test_reaper_cutoff() {
        let tracker = tracker_with(|config| config.tracker_config.announce_interval = 1800);
        assert_eq!(tracker.reaper_cutoff(10_000), 10_000 - 1860);
    }

    #[tokio::test]
    async fn test_resolve_user() {
        let tracker = tracker_with(|_| {});
        assert_eq!(tracker.resolve_user(None).await.unwrap(), 0);
        assert!(matches!(tracker.resolve_user(Some("nope")).await, Err(TrackerError::InvalidPasskey)));

        let enabled = tracker.sqlx.save_user(&User { id: 0, passkey: "a".repeat(40), enabled: true, created_at: 0 }).await.unwrap();
        tracker.sqlx.save_user(&User { id: 0, passkey: "b".repeat(40), enabled: false, created_at: 0 }).await.unwrap();
        assert_eq!(tracker.resolve_user(Some(&"A".repeat(40))).await.unwrap(), enabled.id);
        assert!(matches!(tracker.resolve_user(Some(&"b".repeat(40))).await, Err(TrackerError::InvalidPasskey)));

        let strict = tracker_with(|config| config.tracker_config.require_passkey = true);
        assert!(matches!(strict.resolve_user(None).await, Err(TrackerError::PasskeyRequired)));
    }

    #[tokio::test]
    async fn test_check_whitelist() {
        let open = tracker_with(|_| {});
        assert!(open.check_whitelist("anything").await.is_ok());

        let tracker = tracker_with(|config| config.tracker_config.whitelist_enabled = true);
        tracker.sqlx.save_whitelist(&WhitelistEntry { client_prefix: String::from("qBittorrent/"), name: String::from("qBittorrent") }).await.unwrap();
        assert!(tracker.check_whitelist("qBittorrent/4.6.2").await.is_ok());
        assert!(matches!(tracker.check_whitelist("Transmission/4.0").await, Err(TrackerError::ClientNotWhitelisted)));
    }

    #[tokio::test]
    async fn test_background_tasks_drain_and_count_failures() {
        let stats = Arc::new(StatsAtomics::default());
        let background = BackgroundTasks::new(2, stats.clone());
        let finished = Arc::new(AtomicUsize::new(0));
        for _ in 0..10 {
            let finished = finished.clone();
            background.dispatch("test", async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }
        background.dispatch("failing", async { Err(TrackerError::UnknownRequest) });
        background.drain().await;
        assert_eq!(finished.load(Ordering::SeqCst), 10);
        assert_eq!(background.in_flight(), 0);
        assert_eq!(stats.snapshot().background_failures, 1);
    }

    #[tokio::test]
    async fn test_drain_without_tasks_returns() {
        let background = BackgroundTasks::new(1, Arc::new(StatsAtomics::default()));
        background.drain().await;
    }
}
