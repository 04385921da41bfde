//! Scrape request query parameters.

use std::net::IpAddr;

/// Parsed scrape request parameters.
///
/// Multiple info_hash parameters can be provided to query multiple torrents
/// in a single request; they are answered in the order given.
///
/// ```text
/// GET /scrape?info_hash=%xx...&info_hash=%yy...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeQueryRequest {
    pub info_hashes: Vec<Vec<u8>>,
    /// Requesting address, recorded in the scrape log when known.
    pub ip: Option<IpAddr>,
}
