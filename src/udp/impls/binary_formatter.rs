use log::error;
use crate::common::enums::codec_error::CodecError;
use crate::common::structs::compact_peer::COMPACT_PEER_SIZE;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_data::AnnounceData;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::traits::response_formatter::ResponseFormatter;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::binary_formatter::BinaryFormatter;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::{ACTION_ANNOUNCE, ACTION_SCRAPE, MAX_PACKET_SIZE};

/// Bytes before the first peer of an announce response.
const ANNOUNCE_RESPONSE_HEADER: usize = 20;

impl BinaryFormatter {
    pub fn new(transaction_id: u32) -> BinaryFormatter
    {
        BinaryFormatter { transaction_id }
    }

    pub fn max_peers() -> usize
    {
        (MAX_PACKET_SIZE - ANNOUNCE_RESPONSE_HEADER) / COMPACT_PEER_SIZE
    }

    fn finish(result: Result<Vec<u8>, CodecError>) -> Vec<u8>
    {
        result.unwrap_or_else(|error| {
            error!("[UDP] Unable to encode response: {error}");
            Vec::new()
        })
    }
}

fn clamp(value: u64) -> u32
{
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl ResponseFormatter for BinaryFormatter {
    fn announce(&self, data: &AnnounceData) -> Vec<u8> {
        let peers = data.peers.iter().take(BinaryFormatter::max_peers()).copied().collect();
        BinaryFormatter::finish(AnnounceResponse {
            action: ACTION_ANNOUNCE,
            transaction_id: self.transaction_id,
            interval: clamp(data.interval),
            leechers: clamp(data.incomplete),
            seeders: clamp(data.complete),
            peers,
        }.encode())
    }

    fn scrape(&self, entries: &[ScrapeEntry]) -> Vec<u8> {
        let torrent_stats = entries.iter().map(|entry| TorrentScrapeStatistics {
            seeders: clamp(entry.complete),
            completed: clamp(entry.downloaded),
            leechers: clamp(entry.incomplete),
        }).collect();
        BinaryFormatter::finish(ScrapeResponse {
            action: ACTION_SCRAPE,
            transaction_id: self.transaction_id,
            torrent_stats,
        }.encode())
    }

    fn error(&self, error: &TrackerError, _interval: u64) -> Vec<u8> {
        BinaryFormatter::finish(ErrorResponse::new(self.transaction_id, error.to_string()).encode())
    }
}
