use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::ACTION_CONNECT;

impl ConnectResponse {
    pub fn new(transaction_id: u32, connection_id: u64) -> ConnectResponse
    {
        ConnectResponse { action: ACTION_CONNECT, transaction_id, connection_id }
    }
}

impl WireMessage for ConnectResponse {
    const ACTION: u32 = ACTION_CONNECT;

    fn action(&self) -> u32 {
        self.action
    }

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        bytes.write_u64::<NetworkEndian>(self.connection_id)?;
        Ok(())
    }

    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        Ok(ConnectResponse {
            action: cursor.read_u32::<NetworkEndian>()?,
            transaction_id: cursor.read_u32::<NetworkEndian>()?,
            connection_id: cursor.read_u64::<NetworkEndian>()?,
        })
    }
}
