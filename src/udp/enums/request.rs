use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::packet::Packet;
use crate::udp::structs::scrape_request::ScrapeRequest;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Request {
    Connect(Packet),
    Announce(AnnounceRequest),
    Scrape(ScrapeRequest),
}
