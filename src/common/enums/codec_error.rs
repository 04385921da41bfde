use thiserror::Error;

/// Failure while decoding or encoding a binary tracker message.
///
/// Decoders never panic on short or hostile input; every out of bounds read
/// surfaces as `Malformed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed packet: {0}")]
    Malformed(String),
    #[error("invalid action: expected {expected}, found {found}")]
    InvalidAction { expected: u32, found: u32 },
    #[error("unknown action {0}")]
    UnknownAction(u32),
    #[error("invalid compact peer length: {0} bytes")]
    InvalidLength(usize),
}
