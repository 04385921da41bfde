use std::borrow::Cow;
use bip_bencode::{ben_bytes, ben_int, ben_map, BMutAccess};
use crate::common::structs::compact_peer::CompactPeer;
use crate::http::structs::bencode_formatter::BencodeFormatter;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_data::AnnounceData;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::traits::response_formatter::ResponseFormatter;

impl BencodeFormatter {
    fn write_key(out: &mut Vec<u8>, key: &str)
    {
        out.extend_from_slice(key.len().to_string().as_bytes());
        out.push(b':');
        out.extend_from_slice(key.as_bytes());
    }

    fn write_int(out: &mut Vec<u8>, key: &str, value: u64)
    {
        BencodeFormatter::write_key(out, key);
        out.push(b'i');
        out.extend_from_slice(value.to_string().as_bytes());
        out.push(b'e');
    }

    /// Writes `key` followed by `blob` as a byte string without copying the
    /// blob through a bencode value.
    fn write_raw_bytes(out: &mut Vec<u8>, key: &str, blob: &[u8])
    {
        BencodeFormatter::write_key(out, key);
        out.extend_from_slice(blob.len().to_string().as_bytes());
        out.push(b':');
        out.extend_from_slice(blob);
    }
}

impl ResponseFormatter for BencodeFormatter {
    fn announce(&self, data: &AnnounceData) -> Vec<u8> {
        let peers = CompactPeer::encode_list(&data.peers);
        let mut out = Vec::with_capacity(96 + peers.len());
        out.push(b'd');
        BencodeFormatter::write_int(&mut out, "complete", data.complete);
        BencodeFormatter::write_int(&mut out, "incomplete", data.incomplete);
        BencodeFormatter::write_int(&mut out, "interval", data.interval);
        BencodeFormatter::write_int(&mut out, "min interval", data.min_interval);
        BencodeFormatter::write_raw_bytes(&mut out, "peers", &peers);
        out.push(b'e');
        out
    }

    fn scrape(&self, entries: &[ScrapeEntry]) -> Vec<u8> {
        let mut files = ben_map!();
        if let Some(files_mut) = files.dict_mut() {
            for entry in entries {
                files_mut.insert(Cow::from(entry.info_hash.clone()), ben_map! {
                    "complete" => ben_int!(entry.complete as i64),
                    "downloaded" => ben_int!(entry.downloaded as i64),
                    "incomplete" => ben_int!(entry.incomplete as i64)
                });
            }
        }
        ben_map! {
            "files" => files
        }.encode()
    }

    fn error(&self, error: &TrackerError, interval: u64) -> Vec<u8> {
        ben_map! {
            "failure reason" => ben_bytes!(error.to_string()),
            "interval" => ben_int!(interval as i64),
            "min interval" => ben_int!((interval / 2) as i64)
        }.encode()
    }
}
