use thiserror::Error;
use crate::common::enums::codec_error::CodecError;
use crate::database::enums::storage_error::StorageError;

/// Every failure a client can be told about. The `Display` text is the exact
/// message placed in the bencode `failure reason` or the UDP error datagram.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Malformed announce")]
    MalformedAnnounce,
    #[error("Malformed scrape")]
    MalformedScrape,
    #[error("Unregistered torrent")]
    UnregisteredTorrent,
    #[error("Unverified torrent")]
    UnverifiedTorrent,
    #[error("Invalid connection id")]
    Handshake,
    #[error("Malformed packet")]
    Decode(#[from] CodecError),
    #[error("Internal server error")]
    Storage(#[from] StorageError),
    #[error("Your client does not support compact announce")]
    NonCompact,
    #[error("Invalid passkey")]
    InvalidPasskey,
    #[error("Passkey required")]
    PasskeyRequired,
    #[error("Client not whitelisted")]
    ClientNotWhitelisted,
    #[error("Unknown request")]
    UnknownRequest,
}
