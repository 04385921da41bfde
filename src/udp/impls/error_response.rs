use std::io::{Cursor, Read, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::ACTION_ERROR;

impl ErrorResponse {
    pub fn new(transaction_id: u32, message: impl Into<String>) -> ErrorResponse
    {
        ErrorResponse { action: ACTION_ERROR, transaction_id, message: message.into() }
    }
}

impl WireMessage for ErrorResponse {
    const ACTION: u32 = ACTION_ERROR;

    fn action(&self) -> u32 {
        self.action
    }

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.write_u32::<NetworkEndian>(self.action)?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id)?;
        bytes.write_all(self.message.as_bytes())?;
        Ok(())
    }

    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;
        let mut message = Vec::new();
        cursor.read_to_end(&mut message)?;
        let message = String::from_utf8(message).map_err(|_| CodecError::Malformed(String::from("error message is not UTF-8")))?;
        Ok(ErrorResponse { action, transaction_id, message })
    }
}
