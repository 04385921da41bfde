use std::io;
use crate::common::enums::codec_error::CodecError;

impl From<io::Error> for CodecError {
    fn from(error: io::Error) -> Self {
        CodecError::Malformed(error.to_string())
    }
}
