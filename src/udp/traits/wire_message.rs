use std::io::Cursor;
use crate::common::enums::codec_error::CodecError;

/// A UDP message with a fixed `action` value.
///
/// `encode` refuses a struct whose `action` field disagrees with
/// [`WireMessage::ACTION`]; `decode` refuses a datagram whose header does.
pub trait WireMessage: Sized {
    const ACTION: u32;

    fn action(&self) -> u32;

    fn write_to(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError>;

    fn read_from(cursor: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;

    fn encode(&self) -> Result<Vec<u8>, CodecError>
    {
        check_action(Self::ACTION, self.action())?;
        let mut bytes = Vec::with_capacity(64);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError>
    {
        let mut cursor = Cursor::new(bytes);
        let message = Self::read_from(&mut cursor)?;
        check_action(Self::ACTION, message.action())?;
        Ok(message)
    }
}

pub fn check_action(expected: u32, found: u32) -> Result<(), CodecError>
{
    match expected == found {
        true => Ok(()),
        false => Err(CodecError::InvalidAction { expected, found })
    }
}
