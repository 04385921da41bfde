use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::structs::udp_server::UdpServer;

/// Magic `connection_id` of a connect request (`0x41727101980`).
pub const PROTOCOL_IDENTIFIER: u64 = 0x0417_2710_1980;
pub const MAX_SCRAPE_TORRENTS: usize = 70;
pub const MAX_PACKET_SIZE: usize = 1496;
pub const HEADER_SIZE: usize = 16;

pub const ACTION_CONNECT: u32 = 0;
pub const ACTION_ANNOUNCE: u32 = 1;
pub const ACTION_SCRAPE: u32 = 2;
pub const ACTION_ERROR: u32 = 3;

/// Binds the socket and spawns the receive loop. Stops when `rx` changes.
pub async fn udp_service(addr: SocketAddr, recv_buffer_size: usize, data: Arc<TorrentTracker>, rx: tokio::sync::watch::Receiver<bool>) -> tokio::io::Result<JoinHandle<()>>
{
    let udp_server = UdpServer::new(data, addr, recv_buffer_size).await?;
    info!("[UDP] Starting a server listener on {addr}");
    Ok(tokio::spawn(async move {
        udp_server.start(rx).await;
    }))
}
