/// The 16 byte header that prefixes every request.
pub mod packet;

pub mod connect_response;

pub mod announce_request;

pub mod announce_response;

pub mod scrape_request;

pub mod scrape_response;

/// One seeders/completed/leechers triple of a scrape response.
pub mod torrent_scrape_statistics;

pub mod error_response;

/// Issued connection ids per remote address.
pub mod connection_manager;

pub mod connection_entry;

/// Formats engine results as UDP datagrams.
pub mod binary_formatter;

/// UDP server listening on one socket.
pub mod udp_server;
