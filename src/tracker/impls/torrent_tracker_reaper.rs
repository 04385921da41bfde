use std::sync::Arc;
use log::{info, warn};
use crate::common::common::current_time;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Seconds a peer may stay silent past the announce interval before it is reaped.
pub const REAPER_GRACE: i64 = 60;

impl TorrentTracker {
    /// Peers last seen before this unix time are stale.
    pub fn reaper_cutoff(&self, now: i64) -> i64
    {
        now - (self.announce_interval() as i64 + REAPER_GRACE)
    }

    /// Marks the stale active peers of one file inactive and returns how many changed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn reap_peers(&self, file_id: i64) -> Result<u64, TrackerError>
    {
        reap_file(self.sqlx.backend(), self.stats.clone(), file_id, self.reaper_cutoff(current_time())).await
    }

    /// Sweeps every known file. A failing file is logged and skipped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn reap_all(&self) -> Result<u64, TrackerError>
    {
        let cutoff = self.reaper_cutoff(current_time());
        let mut reaped = 0u64;
        for file in self.sqlx.load_files().await? {
            match reap_file(self.sqlx.backend(), self.stats.clone(), file.id, cutoff).await {
                Ok(count) => { reaped += count; }
                Err(error) => { warn!("[REAPER] Sweeping file {} failed: {error:?}", file.id); }
            }
        }
        self.set_stats(StatsEvent::TimestampReaper, current_time());
        info!("[REAPER] Marked {reaped} peers inactive");
        Ok(reaped)
    }

    pub(crate) fn spawn_reaper(&self, file_id: i64)
    {
        let backend = self.sqlx.backend();
        let stats = self.stats.clone();
        let cutoff = self.reaper_cutoff(current_time());
        self.background.dispatch("reaper", async move {
            reap_file(backend, stats, file_id, cutoff).await?;
            Ok(())
        });
    }
}

async fn reap_file(backend: Arc<dyn DatabaseBackend>, stats: Arc<StatsAtomics>, file_id: i64, cutoff: i64) -> Result<u64, TrackerError>
{
    let stale = backend.inactive_peers(file_id, cutoff).await?;
    if stale.is_empty() {
        return Ok(0);
    }
    let reaped = backend.mark_peers_inactive(&stale).await?;
    stats.update(StatsEvent::PeersReaped, reaped as i64);
    Ok(reaped)
}
