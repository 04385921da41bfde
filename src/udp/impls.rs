pub mod packet;
pub mod connect_response;
pub mod announce_request;
pub mod announce_response;
pub mod scrape_request;
pub mod scrape_response;
pub mod error_response;
pub mod request;
pub mod connection_manager;
pub mod binary_formatter;
pub mod udp_server;
