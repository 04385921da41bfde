use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::background_tasks::BackgroundTasks;
use crate::udp::structs::connection_manager::ConnectionManager;

#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub sqlx: DatabaseConnector,
    pub connections: ConnectionManager,
    pub stats: Arc<StatsAtomics>,
    pub background: BackgroundTasks,
}
