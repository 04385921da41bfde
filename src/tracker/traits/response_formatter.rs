use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_data::AnnounceData;
use crate::tracker::structs::scrape_entry::ScrapeEntry;

/// Turns engine results into response bytes for one transport.
///
/// Errors are rendered in the same format as successes, so a client always
/// gets a well-formed reply.
pub trait ResponseFormatter: Send + Sync {
    fn announce(&self, data: &AnnounceData) -> Vec<u8>;

    /// Entries are written in the given order.
    fn scrape(&self, entries: &[ScrapeEntry]) -> Vec<u8>;

    fn error(&self, error: &TrackerError, interval: u64) -> Vec<u8>;
}
