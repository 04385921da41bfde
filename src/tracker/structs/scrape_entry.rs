/// Statistics for one scraped file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeEntry {
    /// Raw bytes as requested.
    pub info_hash: Vec<u8>,
    pub complete: u64,
    pub downloaded: u64,
    pub incomplete: u64,
}
