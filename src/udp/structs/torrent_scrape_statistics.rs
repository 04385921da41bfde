#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TorrentScrapeStatistics {
    pub seeders: u32,
    pub completed: u32,
    pub leechers: u32,
}
