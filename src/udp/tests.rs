#[cfg(test)]
mod udp_tests {
    use std::net::{Ipv4Addr, SocketAddr};
    use std::time::Duration;
    use crate::common::enums::codec_error::CodecError;
    use crate::common::structs::compact_peer::CompactPeer;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::announce_data::AnnounceData;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::traits::response_formatter::ResponseFormatter;
    use crate::udp::enums::request::Request;
    use crate::udp::structs::announce_request::AnnounceRequest;
    use crate::udp::structs::announce_response::AnnounceResponse;
    use crate::udp::structs::binary_formatter::BinaryFormatter;
    use crate::udp::structs::connect_response::ConnectResponse;
    use crate::udp::structs::connection_manager::ConnectionManager;
    use crate::udp::structs::error_response::ErrorResponse;
    use crate::udp::structs::packet::Packet;
    use crate::udp::structs::scrape_request::ScrapeRequest;
    use crate::udp::structs::scrape_response::ScrapeResponse;
    use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
    use crate::udp::traits::wire_message::WireMessage;
    use crate::udp::udp::{ACTION_ANNOUNCE, ACTION_CONNECT, ACTION_ERROR, ACTION_SCRAPE, MAX_PACKET_SIZE, MAX_SCRAPE_TORRENTS, PROTOCOL_IDENTIFIER};

    fn announce_request() -> AnnounceRequest {
        AnnounceRequest {
            connection_id: 0x1122_3344_5566_7788,
            action: ACTION_ANNOUNCE,
            transaction_id: 0xDEAD_BEEF,
            info_hash: InfoHash([0x11; 20]),
            peer_id: *b"-TR4050-abcdefghijkl",
            downloaded: 1024,
            left: 2048,
            uploaded: 4096,
            event: AnnounceEvent::Started,
            ip: Ipv4Addr::UNSPECIFIED,
            key: 0xCAFE,
            num_want: 0xFFFF_FFFF,
            port: 51413,
        }
    }

    fn scrape_header(connection_id: u64) -> Vec<u8> {
        Packet { connection_id, action: ACTION_SCRAPE, transaction_id: 9 }.encode().unwrap()
    }

    mod codec {
        use super::*;

        #[test]
        fn test_packet_round_trip() {
            let packet = Packet { connection_id: PROTOCOL_IDENTIFIER, action: ACTION_CONNECT, transaction_id: 77 };
            let bytes = packet.encode().unwrap();
            assert_eq!(bytes.len(), 16);
            assert_eq!(&bytes[..8], &[0x00, 0x00, 0x04, 0x17, 0x27, 0x10, 0x19, 0x80]);
            assert_eq!(Packet::decode(&bytes).unwrap(), packet);
        }

        #[test]
        fn test_connect_response_round_trip() {
            let response = ConnectResponse::new(5, 0xAABB_CCDD_EEFF_0011);
            let bytes = response.encode().unwrap();
            assert_eq!(bytes.len(), 16);
            assert_eq!(ConnectResponse::decode(&bytes).unwrap(), response);
        }

        #[test]
        fn test_announce_request_round_trip() {
            let request = announce_request();
            let bytes = request.encode().unwrap();
            assert_eq!(bytes.len(), 98);
            assert_eq!(AnnounceRequest::decode(&bytes).unwrap(), request);
        }

        #[test]
        fn test_announce_response_round_trip() {
            let response = AnnounceResponse {
                action: ACTION_ANNOUNCE,
                transaction_id: 3,
                interval: 1800,
                leechers: 4,
                seeders: 2,
                peers: vec![CompactPeer::new(Ipv4Addr::new(10, 0, 0, 1), 6881), CompactPeer::new(Ipv4Addr::new(192, 168, 1, 2), 51413)],
            };
            let bytes = response.encode().unwrap();
            assert_eq!(bytes.len(), 20 + 12);
            assert_eq!(AnnounceResponse::decode(&bytes).unwrap(), response);
        }

        #[test]
        fn test_scrape_round_trip() {
            let request = ScrapeRequest {
                connection_id: 42,
                action: ACTION_SCRAPE,
                transaction_id: 8,
                info_hashes: vec![InfoHash([1; 20]), InfoHash([2; 20])],
            };
            assert_eq!(ScrapeRequest::decode(&request.encode().unwrap()).unwrap(), request);

            let response = ScrapeResponse {
                action: ACTION_SCRAPE,
                transaction_id: 8,
                torrent_stats: vec![
                    TorrentScrapeStatistics { seeders: 1, completed: 2, leechers: 3 },
                    TorrentScrapeStatistics { seeders: 4, completed: 5, leechers: 6 },
                ],
            };
            let bytes = response.encode().unwrap();
            assert_eq!(bytes.len(), 8 + 24);
            assert_eq!(ScrapeResponse::decode(&bytes).unwrap(), response);
        }

        #[test]
        fn test_error_response_round_trip() {
            let response = ErrorResponse::new(12, "Unverified torrent");
            let bytes = response.encode().unwrap();
            assert_eq!(&bytes[8..], b"Unverified torrent");
            assert_eq!(ErrorResponse::decode(&bytes).unwrap(), response);
        }

        #[test]
        fn test_encode_rejects_wrong_action() {
            let mut response = ErrorResponse::new(1, "x");
            response.action = ACTION_SCRAPE;
            assert_eq!(response.encode(), Err(CodecError::InvalidAction { expected: ACTION_ERROR, found: ACTION_SCRAPE }));

            let mut request = announce_request();
            request.action = ACTION_CONNECT;
            assert!(matches!(request.encode(), Err(CodecError::InvalidAction { .. })));
        }

        #[test]
        fn test_decode_rejects_wrong_action() {
            let bytes = ErrorResponse::new(1, "x").encode().unwrap();
            assert!(matches!(ScrapeResponse::decode(&bytes), Err(CodecError::InvalidAction { expected: ACTION_SCRAPE, found: ACTION_ERROR })));
        }

        #[test]
        fn test_truncated_input_is_malformed() {
            let bytes = announce_request().encode().unwrap();
            for cut in [0, 7, 15, 16, 40, 97] {
                assert!(matches!(AnnounceRequest::decode(&bytes[..cut]), Err(CodecError::Malformed(_))), "cut at {cut}");
            }
            assert!(matches!(Packet::decode(&[0u8; 15]), Err(CodecError::Malformed(_))));

            let mut scrape = ScrapeResponse { action: ACTION_SCRAPE, transaction_id: 1, torrent_stats: vec![TorrentScrapeStatistics { seeders: 1, completed: 1, leechers: 1 }] }.encode().unwrap();
            scrape.truncate(scrape.len() - 2);
            assert!(matches!(ScrapeResponse::decode(&scrape), Err(CodecError::Malformed(_))));
        }

        #[test]
        fn test_announce_response_rejects_partial_peer() {
            let mut bytes = AnnounceResponse { action: ACTION_ANNOUNCE, transaction_id: 1, interval: 1, leechers: 0, seeders: 0, peers: Vec::new() }.encode().unwrap();
            bytes.extend_from_slice(&[1, 2, 3, 4, 5]);
            assert_eq!(AnnounceResponse::decode(&bytes), Err(CodecError::InvalidLength(5)));
        }

        #[test]
        fn test_scrape_request_stops_at_zero_hash() {
            let mut bytes = scrape_header(1);
            bytes.extend_from_slice(&[1; 20]);
            bytes.extend_from_slice(&[0; 20]);
            bytes.extend_from_slice(&[2; 20]);
            assert_eq!(ScrapeRequest::decode(&bytes).unwrap().info_hashes, vec![InfoHash([1; 20])]);
        }

        #[test]
        fn test_scrape_request_caps_and_ignores_partial_slot() {
            let mut bytes = scrape_header(1);
            for index in 0..80u8 {
                bytes.extend_from_slice(&[index + 1; 20]);
            }
            assert_eq!(ScrapeRequest::decode(&bytes).unwrap().info_hashes.len(), MAX_SCRAPE_TORRENTS);

            let mut partial = scrape_header(1);
            partial.extend_from_slice(&[3; 20]);
            partial.extend_from_slice(&[4; 7]);
            assert_eq!(ScrapeRequest::decode(&partial).unwrap().info_hashes, vec![InfoHash([3; 20])]);
        }

        #[test]
        fn test_request_dispatch() {
            let connect = Packet { connection_id: PROTOCOL_IDENTIFIER, action: ACTION_CONNECT, transaction_id: 1 }.encode().unwrap();
            assert!(matches!(Request::from_bytes(&connect), Ok(Request::Connect(_))));

            let bad_magic = Packet { connection_id: 1, action: ACTION_CONNECT, transaction_id: 1 }.encode().unwrap();
            assert!(matches!(Request::from_bytes(&bad_magic), Err(TrackerError::Handshake)));

            let unknown = Packet { connection_id: 1, action: 9, transaction_id: 1 }.encode().unwrap();
            assert!(matches!(Request::from_bytes(&unknown), Err(TrackerError::Decode(CodecError::UnknownAction(9)))));

            let announce = announce_request().encode().unwrap();
            match Request::from_bytes(&announce).unwrap() {
                Request::Announce(request) => assert_eq!(request, announce_request()),
                other => panic!("unexpected {other:?}")
            }
        }

        #[test]
        fn test_announce_request_to_query() {
            let source: SocketAddr = "203.0.113.7:4000".parse().unwrap();
            let query = announce_request().to_query(source.ip());
            assert_eq!(query["ip"][0], b"203.0.113.7".to_vec());
            assert_eq!(query["event"][0], b"started".to_vec());
            assert_eq!(query["numwant"][0], b"4294967295".to_vec());
            assert_eq!(query["info_hash"][0], vec![0x11; 20]);

            let mut explicit = announce_request();
            explicit.ip = Ipv4Addr::new(10, 1, 2, 3);
            assert_eq!(explicit.to_query(source.ip())["ip"][0], b"10.1.2.3".to_vec());
        }
    }

    mod formatter {
        use super::*;

        #[test]
        fn test_announce_truncates_to_packet_size() {
            let peers = (0..400u16).map(|port| CompactPeer::new(Ipv4Addr::LOCALHOST, port)).collect();
            let data = AnnounceData { complete: 1, incomplete: 2, downloaded: 3, interval: 1800, min_interval: 900, peers };
            let bytes = BinaryFormatter::new(7).announce(&data);
            assert!(bytes.len() <= MAX_PACKET_SIZE);
            let decoded = AnnounceResponse::decode(&bytes).unwrap();
            assert_eq!(decoded.peers.len(), BinaryFormatter::max_peers());
            assert_eq!((decoded.transaction_id, decoded.seeders, decoded.leechers, decoded.interval), (7, 1, 2, 1800));
        }

        #[test]
        fn test_error_carries_message() {
            let bytes = BinaryFormatter::new(3).error(&TrackerError::UnverifiedTorrent, 1800);
            assert_eq!(ErrorResponse::decode(&bytes).unwrap(), ErrorResponse::new(3, "Unverified torrent"));
        }
    }

    mod handshake {
        use super::*;

        fn addr(port: u16) -> SocketAddr {
            SocketAddr::from((Ipv4Addr::new(198, 51, 100, 1), port))
        }

        #[tokio::test(start_paused = true)]
        async fn test_connect_then_validate() {
            let manager = ConnectionManager::new(Duration::from_secs(120));
            let id = manager.connect(addr(1));
            assert!(manager.validate(addr(1), id).is_ok());
            assert!(matches!(manager.validate(addr(1), id.wrapping_add(1)), Err(TrackerError::Handshake)));
            assert!(matches!(manager.validate(addr(2), id), Err(TrackerError::Handshake)));
        }

        #[tokio::test(start_paused = true)]
        async fn test_id_expires_after_fixed_ttl() {
            let manager = ConnectionManager::new(Duration::from_secs(120));
            let id = manager.connect(addr(1));

            tokio::time::advance(Duration::from_secs(119)).await;
            assert!(manager.validate(addr(1), id).is_ok(), "use does not renew, but the id is still young");

            tokio::time::advance(Duration::from_secs(2)).await;
            tokio::task::yield_now().await;
            assert!(matches!(manager.validate(addr(1), id), Err(TrackerError::Handshake)));
            assert!(manager.is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn test_old_timer_does_not_remove_new_id() {
            let manager = ConnectionManager::new(Duration::from_secs(120));
            manager.connect(addr(1));
            tokio::time::advance(Duration::from_secs(60)).await;
            let fresh = manager.connect(addr(1));

            tokio::time::advance(Duration::from_secs(61)).await;
            tokio::task::yield_now().await;
            assert!(manager.validate(addr(1), fresh).is_ok());
            assert_eq!(manager.len(), 1);
        }
    }
}
