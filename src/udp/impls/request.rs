use crate::common::enums::codec_error::CodecError;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::udp::enums::request::Request;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::packet::Packet;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::{ACTION_ANNOUNCE, ACTION_CONNECT, ACTION_SCRAPE, PROTOCOL_IDENTIFIER};

impl Request {
    /// Decodes a request datagram. A connect without the protocol magic is a
    /// handshake failure rather than a decode failure.
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Request, TrackerError>
    {
        let header = Packet::decode(bytes)?;
        match header.action {
            ACTION_CONNECT => {
                if header.connection_id != PROTOCOL_IDENTIFIER {
                    return Err(TrackerError::Handshake);
                }
                Ok(Request::Connect(header))
            }
            ACTION_ANNOUNCE => Ok(Request::Announce(AnnounceRequest::decode(bytes)?)),
            ACTION_SCRAPE => Ok(Request::Scrape(ScrapeRequest::decode(bytes)?)),
            action => Err(CodecError::UnknownAction(action).into())
        }
    }

    pub fn connection_id(&self) -> u64
    {
        match self {
            Request::Connect(packet) => packet.connection_id,
            Request::Announce(request) => request.connection_id,
            Request::Scrape(request) => request.connection_id
        }
    }

    pub fn transaction_id(&self) -> u32
    {
        match self {
            Request::Connect(packet) => packet.transaction_id,
            Request::Announce(request) => request.transaction_id,
            Request::Scrape(request) => request.transaction_id
        }
    }
}
