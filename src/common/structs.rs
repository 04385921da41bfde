/// Compact (6 byte) peer representation.
pub mod compact_peer;
