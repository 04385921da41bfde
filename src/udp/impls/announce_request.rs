use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::net::{IpAddr, Ipv4Addr};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::ACTION_ANNOUNCE;

impl AnnounceRequest {
    /// Synthesizes the parameter map the engine validates, as an HTTP query
    /// string would have produced it.
    pub fn to_query(&self, source: IpAddr) -> HashMap<String, Vec<Vec<u8>>>
    {
        let ip = match self.ip.is_unspecified() {
            true => source,
            false => IpAddr::V4(self.ip)
        };
        let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
        let mut put = |key: &str, value: Vec<u8>| { query.insert(key.to_string(), vec![value]); };
        put("info_hash", self.info_hash.0.to_vec());
        put("peer_id", self.peer_id.to_vec());
        put("ip", ip.to_string().into_bytes());
        put("port", self.port.to_string().into_bytes());
        put("uploaded", self.uploaded.to_string().into_bytes());
        put("downloaded", self.downloaded.to_string().into_bytes());
        put("left", self.left.to_string().into_bytes());
        put("event", self.event.as_str().as_bytes().to_vec());
        put("numwant", self.num_want.to_string().into_bytes());
        put("key", format!("{:08x}", self.key).into_bytes());
        query
    }
}

impl WireMessage for AnnounceRequest {
    const ACTION: u32 = ACTION_ANNOUNCE;

    fn action(&self) -> u32 {
        self.action
    }

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.write_u64::<NetworkEndian>(self.connection_id)?;
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        bytes.write_all(&self.info_hash.0)?;
        bytes.write_all(&self.peer_id)?;
        bytes.write_u64::<NetworkEndian>(self.downloaded)?;
        bytes.write_u64::<NetworkEndian>(self.left)?;
        bytes.write_u64::<NetworkEndian>(self.uploaded)?;
        bytes.write_u32::<NetworkEndian>(self.event.to_udp())?;
        bytes.write_u32::<NetworkEndian>(u32::from(self.ip))?;
        bytes.write_u32::<NetworkEndian>(self.key)?;
        bytes.write_u32::<NetworkEndian>(self.num_want)?;
        bytes.write_u16::<NetworkEndian>(self.port)?;
        Ok(())
    }

    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let connection_id = cursor.read_u64::<NetworkEndian>()?;
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;

        let mut info_hash = [0u8; 20];
        let mut peer_id = [0u8; 20];
        cursor.read_exact(&mut info_hash)?;
        cursor.read_exact(&mut peer_id)?;

        let downloaded = cursor.read_u64::<NetworkEndian>()?;
        let left = cursor.read_u64::<NetworkEndian>()?;
        let uploaded = cursor.read_u64::<NetworkEndian>()?;
        let event = cursor.read_u32::<NetworkEndian>()?;
        let ip = Ipv4Addr::from(cursor.read_u32::<NetworkEndian>()?);
        let key = cursor.read_u32::<NetworkEndian>()?;
        let num_want = cursor.read_u32::<NetworkEndian>()?;
        let port = cursor.read_u16::<NetworkEndian>()?;

        Ok(AnnounceRequest {
            connection_id,
            action,
            transaction_id,
            info_hash: InfoHash(info_hash),
            peer_id,
            downloaded,
            left,
            uploaded,
            event: AnnounceEvent::from_udp(event).unwrap_or_default(),
            ip,
            key,
            num_want,
            port,
        })
    }
}
