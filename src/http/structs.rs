/// Per-listener state handed to every handler.
pub mod http_service_data;

/// Formats engine results as bencoded dictionaries.
pub mod bencode_formatter;
