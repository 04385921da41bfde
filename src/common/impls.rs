pub mod codec_error;
pub mod compact_peer;
