use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.update(event, value);
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.set(event, value);
    }

    /// One line summary for the periodic console log.
    pub fn stats_console_line(&self) -> String
    {
        let stats = self.get_stats();
        format!(
            "[STATS] Files: {} - Reaped: {} - Background failures: {} | TCP4 A/S/F: {}/{}/{} - TCP6 A/S/F: {}/{}/{} | UDP4 C/A/S/B/I: {}/{}/{}/{}/{} - UDP6 C/A/S/B/I: {}/{}/{}/{}/{}",
            stats.files, stats.peers_reaped, stats.background_failures,
            stats.tcp4_announces_handled, stats.tcp4_scrapes_handled, stats.tcp4_failure,
            stats.tcp6_announces_handled, stats.tcp6_scrapes_handled, stats.tcp6_failure,
            stats.udp4_connections_handled, stats.udp4_announces_handled, stats.udp4_scrapes_handled, stats.udp4_bad_request, stats.udp4_invalid_request,
            stats.udp6_connections_handled, stats.udp6_announces_handled, stats.udp6_scrapes_handled, stats.udp6_bad_request, stats.udp6_invalid_request,
        )
    }
}
