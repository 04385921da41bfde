use std::io::{Cursor, Read, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::{ACTION_SCRAPE, MAX_SCRAPE_TORRENTS};

impl WireMessage for ScrapeRequest {
    const ACTION: u32 = ACTION_SCRAPE;

    fn action(&self) -> u32 {
        self.action
    }

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.write_u64::<NetworkEndian>(self.connection_id)?;
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        for info_hash in &self.info_hashes {
            bytes.write_all(&info_hash.0)?;
        }
        Ok(())
    }

    /// Stops at the end of the buffer, after 70 hashes, or at an all zero
    /// hash. A trailing partial hash is ignored.
    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let connection_id = cursor.read_u64::<NetworkEndian>()?;
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;

        let mut info_hashes = Vec::new();
        while info_hashes.len() < MAX_SCRAPE_TORRENTS {
            let mut hash = [0u8; 20];
            if cursor.read_exact(&mut hash).is_err() {
                break;
            }
            let info_hash = InfoHash(hash);
            if info_hash.is_zero() {
                break;
            }
            info_hashes.push(info_hash);
        }

        Ok(ScrapeRequest { connection_id, action, transaction_id, info_hashes })
    }
}
