use std::sync::Arc;
use std::time::Duration;
use log::info;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::storage_error::StorageError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::http::structs::bencode_formatter::BencodeFormatter;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::transport::Transport;
use crate::tracker::structs::background_tasks::BackgroundTasks;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::traits::response_formatter::ResponseFormatter;
use crate::udp::structs::binary_formatter::BinaryFormatter;
use crate::udp::structs::connection_manager::ConnectionManager;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> Result<TorrentTracker, StorageError>
    {
        let sqlx = DatabaseConnector::new(config.clone(), create_database).await?;
        let tracker = TorrentTracker::with_connector(config, sqlx);
        info!("[BOOT] Tracker engine ready ({:?} storage)", tracker.sqlx.engine());
        Ok(tracker)
    }

    /// Builds a tracker around an already connected storage back-end.
    pub fn with_connector(config: Arc<Configuration>, sqlx: DatabaseConnector) -> TorrentTracker
    {
        let tracker_config = &config.tracker_config;
        let stats = Arc::new(StatsAtomics::new(current_time()));
        TorrentTracker {
            connections: ConnectionManager::new(Duration::from_secs(tracker_config.connection_ttl)),
            background: BackgroundTasks::new(tracker_config.background_workers as usize, stats.clone()),
            stats,
            sqlx,
            config,
        }
    }

    pub fn announce_interval(&self) -> u64
    {
        self.config.tracker_config.announce_interval
    }

    pub fn formatter(&self, transport: Transport) -> Box<dyn ResponseFormatter>
    {
        match transport {
            Transport::Http => Box::new(BencodeFormatter),
            Transport::Udp { transaction_id } => Box::new(BinaryFormatter::new(transaction_id))
        }
    }
}
