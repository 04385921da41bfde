use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::udp::structs::packet::Packet;

impl Packet {
    pub fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError>
    {
        bytes.write_u64::<NetworkEndian>(self.connection_id)?;
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        Ok(())
    }

    pub fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Packet, CodecError>
    {
        Ok(Packet {
            connection_id: cursor.read_u64::<NetworkEndian>()?,
            action: cursor.read_u32::<NetworkEndian>()?,
            transaction_id: cursor.read_u32::<NetworkEndian>()?,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError>
    {
        let mut bytes = Vec::with_capacity(16);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads the header of any request. Trailing bytes are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Packet, CodecError>
    {
        Packet::read_from(&mut Cursor::new(bytes))
    }
}
