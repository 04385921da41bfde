use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use log::{debug, warn};
use crate::common::common::current_time;
use crate::common::structs::compact_peer::CompactPeer;
use crate::database::enums::storage_error::StorageError;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::transport::Transport;
use crate::tracker::structs::announce_data::AnnounceData;
use crate::tracker::structs::announce_log::AnnounceLog;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::file_user_record::FileUserRecord;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::structs::scrape_log::ScrapeLog;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::torrent_file::TorrentFile;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// `numwant` used when the client sends none, zero or the UDP sentinel.
pub const DEFAULT_NUMWANT: u64 = 50;
/// UDP `num_want` value meaning "use the default".
pub const NUMWANT_SENTINEL: u64 = 0xFFFF_FFFF;
/// Longest raw `info_hash` accepted; fits the 128 character storage column.
pub const MAX_INFO_HASH_LENGTH: usize = 64;
/// Transfer counters are stored as signed 64-bit integers.
pub const MAX_STORED_COUNTER: u64 = i64::MAX as u64;

fn valid_info_hash(raw: &[u8]) -> bool
{
    !raw.is_empty() && raw.len() <= MAX_INFO_HASH_LENGTH
}

impl TorrentTracker {
    /// Validates, handles and formats an announce. Failures are formatted
    /// as error responses of the same transport.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub async fn announce(&self, transport: Transport, user_id: i64, query: &HashMap<String, Vec<Vec<u8>>>) -> Vec<u8>
    {
        let formatter = self.formatter(transport);
        let result = match self.validate_announce(query) {
            Ok(request) => self.handle_announce(transport, user_id, request).await,
            Err(error) => Err(error)
        };
        match result {
            Ok(data) => formatter.announce(&data),
            Err(error) => {
                debug!("[ANNOUNCE] Rejected: {error}");
                formatter.error(&error, self.announce_interval())
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self, query))]
    pub async fn scrape(&self, transport: Transport, user_id: i64, ip: Option<IpAddr>, query: &HashMap<String, Vec<Vec<u8>>>) -> Vec<u8>
    {
        let formatter = self.formatter(transport);
        let result = match self.validate_scrape(query, ip) {
            Ok(request) => self.handle_scrape(user_id, request).await,
            Err(error) => Err(error)
        };
        match result {
            Ok(entries) => formatter.scrape(&entries),
            Err(error) => {
                debug!("[SCRAPE] Rejected: {error}");
                formatter.error(&error, self.announce_interval())
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn validate_announce(&self, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, TrackerError>
    {
        fn first<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
            query.get(field).and_then(|values| values.first()).map(|value| value.as_slice())
        }

        fn required<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<&'a [u8], TrackerError> {
            first(query, field).ok_or(TrackerError::MalformedAnnounce)
        }

        fn parse_integer<T: FromStr>(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<T, TrackerError> {
            let bytes = required(query, field)?;
            std::str::from_utf8(bytes).ok()
                .and_then(|value| value.trim().parse::<T>().ok())
                .ok_or(TrackerError::MalformedAnnounce)
        }

        fn text(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> String {
            first(query, field).map(|bytes| String::from_utf8_lossy(bytes).into_owned()).unwrap_or_default()
        }

        let info_hash = required(query, "info_hash")?;
        if !valid_info_hash(info_hash) {
            return Err(TrackerError::MalformedAnnounce);
        }
        let ip = std::str::from_utf8(required(query, "ip")?).ok()
            .and_then(|value| IpAddr::from_str(value.trim()).ok())
            .ok_or(TrackerError::MalformedAnnounce)?;
        let port = parse_integer::<u16>(query, "port")?;
        let uploaded = parse_integer::<u64>(query, "uploaded")?.min(MAX_STORED_COUNTER);
        let downloaded = parse_integer::<u64>(query, "downloaded")?.min(MAX_STORED_COUNTER);
        let left = parse_integer::<u64>(query, "left")?.min(MAX_STORED_COUNTER);

        let event = first(query, "event")
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(AnnounceEvent::from_query)
            .unwrap_or_default();

        let max_numwant = self.config.tracker_config.max_numwant;
        let numwant = first(query, "numwant")
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value != 0 && *value != NUMWANT_SENTINEL)
            .unwrap_or(DEFAULT_NUMWANT)
            .min(max_numwant);

        Ok(AnnounceQueryRequest {
            info_hash: info_hash.to_vec(),
            peer_id: first(query, "peer_id").map(|bytes| bytes.to_vec()).unwrap_or_default(),
            ip,
            port,
            uploaded,
            downloaded,
            left,
            event,
            numwant,
            key: text(query, "key"),
            client: text(query, "client"),
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_announce(&self, transport: Transport, user_id: i64, request: AnnounceQueryRequest) -> Result<AnnounceData, TrackerError>
    {
        let now = current_time();
        let info_hash = hex::encode(&request.info_hash);

        let log = AnnounceLog {
            info_hash: info_hash.clone(),
            peer_id: hex::encode(&request.peer_id),
            ip: request.ip.to_string(),
            port: request.port,
            uploaded: request.uploaded,
            downloaded: request.downloaded,
            left: request.left,
            event: request.event,
            key: request.key.clone(),
            client: request.client.clone(),
            user_id,
            created_at: now,
        };
        let backend = self.sqlx.backend();
        self.background.dispatch("announce log", async move {
            backend.save_announce_log(&log).await?;
            Ok(())
        });

        let file = self.resolve_file(&info_hash, now).await?;
        if !file.verified {
            return Err(TrackerError::UnverifiedTorrent);
        }
        self.spawn_reaper(file.id);

        if transport == Transport::Http {
            self.update_peer(&file, user_id, &request, now).await?;
        }

        let interval = self.announce_interval();
        let peers = match self.sqlx.peer_list_by_info_hash(&info_hash, request.numwant).await {
            Ok(addresses) => addresses.into_iter().filter_map(CompactPeer::from_socket_addr).collect(),
            Err(error) => {
                warn!("[ANNOUNCE] Peer list for {info_hash} unavailable: {error}");
                Vec::new()
            }
        };
        Ok(AnnounceData {
            complete: count_or_zero(self.sqlx.count_seeders(file.id).await, "seeders"),
            incomplete: count_or_zero(self.sqlx.count_leechers(file.id).await, "leechers"),
            downloaded: count_or_zero(self.sqlx.count_completed(file.id).await, "completed"),
            interval,
            min_interval: interval / 2,
            peers,
        })
    }

    pub fn validate_scrape(&self, query: &HashMap<String, Vec<Vec<u8>>>, ip: Option<IpAddr>) -> Result<ScrapeQueryRequest, TrackerError>
    {
        let values = match query.get("info_hash") {
            None => { return Err(TrackerError::MalformedScrape); }
            Some(values) if values.is_empty() => { return Err(TrackerError::MalformedScrape); }
            Some(values) => values
        };
        if !values.iter().all(|value| valid_info_hash(value)) {
            return Err(TrackerError::MalformedScrape);
        }
        Ok(ScrapeQueryRequest { info_hashes: values.clone(), ip })
    }

    /// Answers every hash or none: the first hash that fails resolution or
    /// verification aborts the batch with its error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_scrape(&self, user_id: i64, request: ScrapeQueryRequest) -> Result<Vec<ScrapeEntry>, TrackerError>
    {
        let now = current_time();
        let ip = request.ip.map(|ip| ip.to_string()).unwrap_or_default();
        let mut entries = Vec::with_capacity(request.info_hashes.len());
        for info_hash in request.info_hashes {
            let hex = hex::encode(&info_hash);

            let log = ScrapeLog {
                info_hash: hex.clone(),
                user_id,
                ip: ip.clone(),
                created_at: now,
            };
            let backend = self.sqlx.backend();
            self.background.dispatch("scrape log", async move {
                backend.save_scrape_log(&log).await?;
                Ok(())
            });

            let file = self.resolve_file(&hex, now).await?;
            if !file.verified {
                return Err(TrackerError::UnverifiedTorrent);
            }
            self.spawn_reaper(file.id);

            entries.push(ScrapeEntry {
                info_hash,
                complete: count_or_zero(self.sqlx.count_seeders(file.id).await, "seeders"),
                downloaded: count_or_zero(self.sqlx.count_completed(file.id).await, "completed"),
                incomplete: count_or_zero(self.sqlx.count_leechers(file.id).await, "leechers"),
            });
        }
        Ok(entries)
    }

    /// Loads the file for `info_hash`. An unknown hash is stored unverified
    /// before `UnregisteredTorrent` is returned.
    async fn resolve_file(&self, info_hash: &str, now: i64) -> Result<TorrentFile, TrackerError>
    {
        if let Some(file) = self.sqlx.load_file_by_info_hash(info_hash).await? {
            return Ok(file);
        }
        self.sqlx.save_file(&TorrentFile {
            id: 0,
            info_hash: info_hash.to_string(),
            verified: false,
            created_at: now,
            updated_at: now,
        }).await?;
        self.update_stats(StatsEvent::Files, 1);
        debug!("[ANNOUNCE] Registered unverified file {info_hash}");
        Err(TrackerError::UnregisteredTorrent)
    }

    /// New peers are stored before returning; changes to known peers are
    /// written in the background.
    async fn update_peer(&self, file: &TorrentFile, user_id: i64, request: &AnnounceQueryRequest, now: i64) -> Result<(), TrackerError>
    {
        let ip = request.ip.to_string();
        match self.sqlx.load_peer(file.id, user_id, &ip).await? {
            None => {
                let peer = FileUserRecord {
                    file_id: file.id,
                    user_id,
                    ip,
                    port: request.port,
                    active: true,
                    completed: request.left == 0,
                    announced: 1,
                    uploaded: request.uploaded,
                    downloaded: request.downloaded,
                    left: request.left,
                    last_seen: now,
                    created_at: now,
                };
                self.sqlx.save_peer(&peer).await?;
            }
            Some(mut peer) => {
                peer.apply_announce(request, now);
                let backend = self.sqlx.backend();
                self.background.dispatch("peer update", async move {
                    backend.save_peer(&peer).await?;
                    Ok(())
                });
            }
        }
        Ok(())
    }
}

impl FileUserRecord {
    /// Folds a repeated announce into the stored record.
    pub fn apply_announce(&mut self, request: &AnnounceQueryRequest, now: i64)
    {
        self.active = request.event != AnnounceEvent::Stopped;
        self.completed = request.event == AnnounceEvent::Completed || request.left == 0;
        self.announced = self.announced.saturating_add(1).min(MAX_STORED_COUNTER);
        self.uploaded = self.uploaded.max(request.uploaded);
        self.downloaded = self.downloaded.max(request.downloaded);
        self.left = self.left.min(request.left);
        self.port = request.port;
        self.last_seen = now;
    }
}

fn count_or_zero(result: Result<u64, StorageError>, what: &str) -> u64
{
    result.unwrap_or_else(|error| {
        warn!("[ANNOUNCE] Counting {what} failed: {error}");
        0
    })
}
