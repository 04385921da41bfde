mod common;

use std::net::{Ipv4Addr, SocketAddr};
use swarm_tracker::common::structs::compact_peer::CompactPeer;
use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::udp::structs::announce_request::AnnounceRequest;
use swarm_tracker::udp::structs::announce_response::AnnounceResponse;
use swarm_tracker::udp::structs::connect_response::ConnectResponse;
use swarm_tracker::udp::structs::error_response::ErrorResponse;
use swarm_tracker::udp::structs::packet::Packet;
use swarm_tracker::udp::structs::scrape_request::ScrapeRequest;
use swarm_tracker::udp::structs::scrape_response::ScrapeResponse;
use swarm_tracker::udp::structs::udp_server::UdpServer;
use swarm_tracker::udp::traits::wire_message::WireMessage;
use swarm_tracker::udp::udp::{ACTION_ANNOUNCE, ACTION_CONNECT, ACTION_SCRAPE, PROTOCOL_IDENTIFIER};

fn remote() -> SocketAddr {
    SocketAddr::from(([192, 168, 0, 10], 40000))
}

fn announce(connection_id: u64, info_hash: InfoHash) -> Vec<u8> {
    AnnounceRequest {
        connection_id,
        action: ACTION_ANNOUNCE,
        transaction_id: 77,
        info_hash,
        peer_id: *b"-TR4050-abcdefghijkl",
        downloaded: 0,
        left: 100,
        uploaded: 0,
        event: AnnounceEvent::Started,
        ip: Ipv4Addr::UNSPECIFIED,
        key: 1,
        num_want: 0xFFFF_FFFF,
        port: 51413,
    }.encode().unwrap()
}

async fn connect(tracker: &common::TestTracker) -> u64 {
    let request = Packet { connection_id: PROTOCOL_IDENTIFIER, action: ACTION_CONNECT, transaction_id: 5 }.encode().unwrap();
    let response = UdpServer::handle_packet(remote(), &request, tracker).await.expect("connect is answered");
    let response = ConnectResponse::decode(&response).unwrap();
    assert_eq!(response.transaction_id, 5);
    response.connection_id
}

#[tokio::test]
async fn test_connect_then_announce() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let file = common::register_file(&tracker, info_hash, true).await;
    tracker.sqlx.save_peer(&swarm_tracker::tracker::structs::file_user_record::FileUserRecord {
        file_id: file.id,
        user_id: 0,
        ip: String::from("10.9.8.7"),
        port: 6881,
        active: true,
        completed: true,
        announced: 1,
        uploaded: 0,
        downloaded: 0,
        left: 0,
        last_seen: swarm_tracker::common::common::current_time(),
        created_at: 0,
    }).await.unwrap();

    let connection_id = connect(&tracker).await;
    let response = UdpServer::handle_packet(remote(), &announce(connection_id, info_hash), &tracker).await.unwrap();
    let response = AnnounceResponse::decode(&response).unwrap();
    assert_eq!(response.transaction_id, 77);
    assert_eq!(response.interval, 1800);
    assert_eq!((response.seeders, response.leechers), (1, 0));
    assert_eq!(response.peers, vec![CompactPeer::new(Ipv4Addr::new(10, 9, 8, 7), 6881)]);

    let stats = tracker.get_stats();
    assert_eq!(stats.udp4_connections_handled, 1);
    assert_eq!(stats.udp4_announces_handled, 1);
    tracker.background.drain().await;
}

#[tokio::test]
async fn test_announce_with_unknown_connection_id() {
    let tracker = common::create_test_tracker();
    let response = UdpServer::handle_packet(remote(), &announce(42, common::random_info_hash()), &tracker).await.unwrap();
    let error = ErrorResponse::decode(&response).unwrap();
    assert_eq!(error.transaction_id, 77);
    assert_eq!(error.message, "Invalid connection id");
    assert_eq!(tracker.get_stats().udp4_invalid_request, 1);
}

#[tokio::test]
async fn test_connection_id_is_bound_to_source_address() {
    let tracker = common::create_test_tracker();
    let connection_id = connect(&tracker).await;
    let elsewhere = SocketAddr::from(([192, 168, 0, 11], 40000));
    let response = UdpServer::handle_packet(elsewhere, &announce(connection_id, common::random_info_hash()), &tracker).await.unwrap();
    assert_eq!(ErrorResponse::decode(&response).unwrap().message, "Invalid connection id");
}

#[tokio::test]
async fn test_announce_for_unknown_file() {
    let tracker = common::create_test_tracker();
    let connection_id = connect(&tracker).await;
    let response = UdpServer::handle_packet(remote(), &announce(connection_id, common::random_info_hash()), &tracker).await.unwrap();
    assert_eq!(ErrorResponse::decode(&response).unwrap().message, "Unregistered torrent");
    tracker.background.drain().await;
}

#[tokio::test]
async fn test_scrape_round_trip() {
    let tracker = common::create_test_tracker();
    let first = common::random_info_hash();
    let second = common::random_info_hash();
    common::register_file(&tracker, first, true).await;
    common::register_file(&tracker, second, true).await;

    let connection_id = connect(&tracker).await;
    let request = ScrapeRequest { connection_id, action: ACTION_SCRAPE, transaction_id: 3, info_hashes: vec![first, second] }.encode().unwrap();
    let response = UdpServer::handle_packet(remote(), &request, &tracker).await.unwrap();
    let response = ScrapeResponse::decode(&response).unwrap();
    assert_eq!(response.transaction_id, 3);
    assert_eq!(response.torrent_stats.len(), 2);
    assert_eq!(tracker.get_stats().udp4_scrapes_handled, 1);
    tracker.background.drain().await;
}

#[tokio::test]
async fn test_garbage_is_dropped() {
    let tracker = common::create_test_tracker();
    assert!(UdpServer::handle_packet(remote(), &[1, 2, 3], &tracker).await.is_none());
    assert_eq!(tracker.get_stats().udp4_bad_request, 1);
}

#[tokio::test]
async fn test_unknown_action_gets_error_reply() {
    let tracker = common::create_test_tracker();
    let request = Packet { connection_id: 1, action: 9, transaction_id: 11 }.encode().unwrap();
    let response = UdpServer::handle_packet(remote(), &request, &tracker).await.unwrap();
    let error = ErrorResponse::decode(&response).unwrap();
    assert_eq!(error.transaction_id, 11);
    assert_eq!(error.message, "Malformed packet");
}

#[tokio::test]
async fn test_server_answers_over_the_socket() {
    let tracker = common::create_test_tracker();
    let server = UdpServer::new(tracker.clone(), SocketAddr::from(([127, 0, 0, 1], 0)), 65536).await.unwrap();
    let address = server.local_addr().unwrap();
    let (tx, rx) = tokio::sync::watch::channel(false);
    let handle = tokio::spawn(async move { server.start(rx).await });

    let client = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let request = Packet { connection_id: PROTOCOL_IDENTIFIER, action: ACTION_CONNECT, transaction_id: 99 }.encode().unwrap();
    client.send_to(&request, address).await.unwrap();
    let mut buffer = [0u8; 64];
    let (length, _) = tokio::time::timeout(std::time::Duration::from_secs(5), client.recv_from(&mut buffer)).await.unwrap().unwrap();
    assert_eq!(length, 16);
    assert_eq!(ConnectResponse::decode(&buffer[..length]).unwrap().transaction_id, 99);

    tx.send(true).unwrap();
    handle.await.unwrap();
}
