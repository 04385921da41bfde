#[cfg(test)]
mod common_tests {
    use std::net::Ipv4Addr;
    use proptest::prelude::*;
    use crate::common::common::{log_level_filter, parse_query};
    use crate::common::enums::codec_error::CodecError;
    use crate::common::structs::compact_peer::CompactPeer;

    #[test]
    fn test_parse_query_multi_valued() {
        let query = parse_query(Some(String::from("info_hash=%AA%BB&info_hash=%CC&Port=6881&compact")));

        assert_eq!(query.get("info_hash"), Some(&vec![vec![0xAA, 0xBB], vec![0xCC]]));
        assert_eq!(query.get("port"), Some(&vec![b"6881".to_vec()]), "Keys should be lowercased");
        assert_eq!(query.get("compact"), Some(&vec![vec![]]), "Bare keys map to an empty value");
    }

    #[test]
    fn test_parse_query_empty() {
        assert!(parse_query(None).is_empty());
        assert!(parse_query(Some(String::from("&&=x"))).is_empty());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log_level_filter("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(log_level_filter("verbose"), None);
    }

    #[test]
    fn test_compact_peer_encode_layout() {
        let peer = CompactPeer::new(Ipv4Addr::new(127, 0, 0, 1), 5000);
        assert_eq!(peer.encode(), [127, 0, 0, 1, 0x13, 0x88]);
    }

    #[test]
    fn test_compact_peer_decode_rejects_wrong_length() {
        assert_eq!(CompactPeer::decode(&[1, 2, 3, 4, 5]), Err(CodecError::InvalidLength(5)));
        assert_eq!(CompactPeer::decode(&[0; 7]), Err(CodecError::InvalidLength(7)));
    }

    #[test]
    fn test_compact_peer_decode_list_rejects_partial_entry() {
        let mut blob = CompactPeer::encode_list(&[
            CompactPeer::new(Ipv4Addr::new(10, 0, 0, 1), 1),
            CompactPeer::new(Ipv4Addr::new(10, 0, 0, 2), 2),
        ]);
        assert_eq!(CompactPeer::decode_list(&blob).map(|peers| peers.len()), Ok(2));

        blob.push(0xFF);
        assert_eq!(CompactPeer::decode_list(&blob), Err(CodecError::InvalidLength(13)));
    }

    proptest! {
        #[test]
        fn prop_compact_peer_round_trip(ip in any::<u32>(), port in any::<u16>()) {
            let peer = CompactPeer::new(Ipv4Addr::from(ip), port);
            prop_assert_eq!(CompactPeer::decode(&peer.encode()), Ok(peer));
        }

        #[test]
        fn prop_compact_peer_list_length_must_be_multiple_of_six(len in 0usize..64) {
            let blob = vec![0u8; len];
            let result = CompactPeer::decode_list(&blob);
            prop_assert_eq!(result.is_ok(), len % 6 == 0);
        }
    }
}
