use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::ACTION_SCRAPE;

impl WireMessage for ScrapeResponse {
    const ACTION: u32 = ACTION_SCRAPE;

    fn action(&self) -> u32 {
        self.action
    }

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        for stats in &self.torrent_stats {
            bytes.write_u32::<NetworkEndian>(stats.seeders)?;
            bytes.write_u32::<NetworkEndian>(stats.completed)?;
            bytes.write_u32::<NetworkEndian>(stats.leechers)?;
        }
        Ok(())
    }

    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;

        let total = cursor.get_ref().len() as u64;
        let mut torrent_stats = Vec::new();
        while cursor.position() < total {
            torrent_stats.push(TorrentScrapeStatistics {
                seeders: cursor.read_u32::<NetworkEndian>()?,
                completed: cursor.read_u32::<NetworkEndian>()?,
                leechers: cursor.read_u32::<NetworkEndian>()?,
            });
        }

        Ok(ScrapeResponse { action, transaction_id, torrent_stats })
    }
}
