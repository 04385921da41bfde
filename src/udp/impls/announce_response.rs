use std::io::{Cursor, Read};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::common::structs::compact_peer::CompactPeer;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::ACTION_ANNOUNCE;

impl WireMessage for AnnounceResponse {
    const ACTION: u32 = ACTION_ANNOUNCE;

    fn action(&self) -> u32 {
        self.action
    }

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        bytes.write_u32::<NetworkEndian>(self.interval)?;
        bytes.write_u32::<NetworkEndian>(self.leechers)?;
        bytes.write_u32::<NetworkEndian>(self.seeders)?;
        for peer in &self.peers {
            peer.write(bytes)?;
        }
        Ok(())
    }

    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;
        let interval = cursor.read_u32::<NetworkEndian>()?;
        let leechers = cursor.read_u32::<NetworkEndian>()?;
        let seeders = cursor.read_u32::<NetworkEndian>()?;
        let mut rest = Vec::new();
        cursor.read_to_end(&mut rest)?;
        Ok(AnnounceResponse {
            action,
            transaction_id,
            interval,
            leechers,
            seeders,
            peers: CompactPeer::decode_list(&rest)?,
        })
    }
}
