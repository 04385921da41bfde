use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::transport::Transport;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user::ANONYMOUS_USER_ID;
use crate::tracker::traits::response_formatter::ResponseFormatter;
use crate::udp::enums::request::Request;
use crate::udp::structs::binary_formatter::BinaryFormatter;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::packet::Packet;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::traits::wire_message::WireMessage;
use crate::udp::udp::MAX_PACKET_SIZE;

impl UdpServer {
    #[tracing::instrument(level = "debug", skip(tracker))]
    pub async fn new(tracker: Arc<TorrentTracker>, bind_address: SocketAddr, recv_buffer_size: usize) -> tokio::io::Result<UdpServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_recv_buffer_size(recv_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_reuse_address(true).map_err(tokio::io::Error::other)?;
        socket.bind(&bind_address.into()).map_err(tokio::io::Error::other)?;
        socket.set_nonblocking(true).map_err(tokio::io::Error::other)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        debug!("[UDP] Socket created with receive buffer of {} bytes", sock_ref.recv_buffer_size().unwrap_or(0));

        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            tracker,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    /// Receives datagrams until `rx` changes. Each datagram is answered on
    /// its own task.
    #[tracing::instrument(level = "debug", skip(self, rx))]
    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let mut data = [0u8; 2048];
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[UDP] Stopping server on {:?}...", self.socket.local_addr());
                    break;
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            let payload = data[..valid_bytes].to_vec();
                            let tracker = self.tracker.clone();
                            let socket = self.socket.clone();
                            tokio::spawn(async move {
                                if let Some(response) = UdpServer::handle_packet(remote_addr, &payload, &tracker).await {
                                    UdpServer::send_response(&socket, remote_addr, &response).await;
                                }
                            });
                        }
                        Err(e) => {
                            if e.kind() != std::io::ErrorKind::WouldBlock {
                                error!("[UDP] recv_from error: {e}");
                            }
                        }
                    }
                }
            }
        }
    }

    pub async fn send_response(socket: &UdpSocket, remote_addr: SocketAddr, response: &[u8])
    {
        if response.is_empty() || response.len() > MAX_PACKET_SIZE {
            debug!("[UDP] Not sending {} byte response to {remote_addr}", response.len());
            return;
        }
        if let Err(error) = socket.send_to(response, remote_addr).await {
            debug!("[UDP] Could not send response to {remote_addr}: {error}");
        }
    }

    /// Produces the reply for one datagram, or `None` when it is dropped.
    #[tracing::instrument(level = "debug", skip(payload, tracker))]
    pub async fn handle_packet(remote_addr: SocketAddr, payload: &[u8], tracker: &TorrentTracker) -> Option<Vec<u8>>
    {
        let interval = tracker.announce_interval();
        let request = match Request::from_bytes(payload) {
            Ok(request) => request,
            Err(error) => {
                tracker.update_stats(UdpServer::stat(remote_addr, StatsEvent::Udp4BadRequest, StatsEvent::Udp6BadRequest), 1);
                debug!("[UDP] Bad request from {remote_addr}: {error:?}");
                return Packet::decode(payload).ok()
                    .map(|header| BinaryFormatter::new(header.transaction_id).error(&error, interval));
            }
        };

        let transaction_id = request.transaction_id();
        let formatter = BinaryFormatter::new(transaction_id);

        if let Request::Connect(_) = request {
            tracker.update_stats(UdpServer::stat(remote_addr, StatsEvent::Udp4ConnectionsHandled, StatsEvent::Udp6ConnectionsHandled), 1);
            let connection_id = tracker.connections.connect(remote_addr);
            return ConnectResponse::new(transaction_id, connection_id).encode().ok();
        }

        if let Err(error) = tracker.connections.validate(remote_addr, request.connection_id()) {
            tracker.update_stats(UdpServer::stat(remote_addr, StatsEvent::Udp4InvalidRequest, StatsEvent::Udp6InvalidRequest), 1);
            return Some(formatter.error(&error, interval));
        }

        let transport = Transport::Udp { transaction_id };
        match request {
            Request::Announce(announce) => {
                tracker.update_stats(UdpServer::stat(remote_addr, StatsEvent::Udp4AnnouncesHandled, StatsEvent::Udp6AnnouncesHandled), 1);
                let query = announce.to_query(remote_addr.ip());
                Some(tracker.announce(transport, ANONYMOUS_USER_ID, &query).await)
            }
            Request::Scrape(scrape) => {
                tracker.update_stats(UdpServer::stat(remote_addr, StatsEvent::Udp4ScrapesHandled, StatsEvent::Udp6ScrapesHandled), 1);
                let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
                query.insert(String::from("info_hash"), scrape.info_hashes.iter().map(|info_hash| info_hash.0.to_vec()).collect());
                Some(tracker.scrape(transport, ANONYMOUS_USER_ID, Some(remote_addr.ip()), &query).await)
            }
            Request::Connect(_) => None
        }
    }

    fn stat(remote_addr: SocketAddr, v4: StatsEvent, v6: StatsEvent) -> StatsEvent
    {
        match remote_addr {
            SocketAddr::V4(_) => v4,
            SocketAddr::V6(_) => v6
        }
    }
}
