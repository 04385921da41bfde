use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ScrapeResponse {
    pub action: u32,
    pub transaction_id: u32,
    /// Same order as the requested hashes.
    pub torrent_stats: Vec<TorrentScrapeStatistics>,
}
