//! Traits for tracker response encoding.

/// Encodes engine results in the wire format of one transport.
pub mod response_formatter;
