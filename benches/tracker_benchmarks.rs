// Performance benchmarks for the swarm tracker
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::hint::black_box;
use std::net::Ipv4Addr;
use std::sync::Arc;
use swarm_tracker::common::common::parse_query;
use swarm_tracker::common::structs::compact_peer::CompactPeer;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::database::enums::database_drivers::DatabaseDrivers;
use swarm_tracker::database::structs::database_connector::DatabaseConnector;
use swarm_tracker::database::structs::database_connector_memory::DatabaseConnectorMemory;
use swarm_tracker::http::structs::bencode_formatter::BencodeFormatter;
use swarm_tracker::tracker::enums::transport::Transport;
use swarm_tracker::tracker::structs::announce_data::AnnounceData;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::torrent_file::TorrentFile;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use swarm_tracker::tracker::traits::response_formatter::ResponseFormatter;
use swarm_tracker::udp::structs::binary_formatter::BinaryFormatter;

fn random_info_hash() -> InfoHash {
    use rand::RngExt;
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

fn create_tracker() -> Arc<TorrentTracker> {
    let mut config = Configuration::default();
    config.database.engine = DatabaseDrivers::memory;
    let connector = DatabaseConnector::from_backend(DatabaseDrivers::memory, Arc::new(DatabaseConnectorMemory::new()));
    Arc::new(TorrentTracker::with_connector(Arc::new(config), connector))
}

fn announce_data(peers: usize) -> AnnounceData {
    AnnounceData {
        complete: 10,
        incomplete: 20,
        downloaded: 30,
        interval: 1800,
        min_interval: 900,
        peers: (0..peers).map(|i| CompactPeer::new(Ipv4Addr::new(10, 0, (i / 256) as u8, (i % 256) as u8), 6881)).collect(),
    }
}

fn announce_query(info_hash: InfoHash, host: u32) -> HashMap<String, Vec<Vec<u8>>> {
    let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    query.insert(String::from("info_hash"), vec![info_hash.0.to_vec()]);
    query.insert(String::from("ip"), vec![Ipv4Addr::from(0x0A00_0000 + host).to_string().into_bytes()]);
    query.insert(String::from("port"), vec![b"6881".to_vec()]);
    query.insert(String::from("uploaded"), vec![b"0".to_vec()]);
    query.insert(String::from("downloaded"), vec![b"0".to_vec()]);
    query.insert(String::from("left"), vec![b"1000".to_vec()]);
    query
}

fn bench_query_parsing(c: &mut Criterion) {
    let raw = String::from("info_hash=%AB%CD%EF%01%23%45%67%89%AB%CD%EF%01%23%45%67%89%AB%CD%EF%01&peer_id=-qB4620-abcdefghijkl&port=6881&uploaded=0&downloaded=0&left=1000&compact=1&event=started");
    c.bench_function("parse_announce_query", |b| {
        b.iter(|| black_box(parse_query(Some(raw.clone()))));
    });
}

fn bench_announce_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("announce_formatting");
    for peers in [0usize, 50, 200].iter() {
        let data = announce_data(*peers);
        group.bench_with_input(BenchmarkId::new("bencode", peers), &data, |b, data| {
            b.iter(|| black_box(BencodeFormatter.announce(data)));
        });
        group.bench_with_input(BenchmarkId::new("binary", peers), &data, |b, data| {
            b.iter(|| black_box(BinaryFormatter::new(1).announce(data)));
        });
    }
    group.finish();
}

fn bench_udp_packet_parsing(c: &mut Criterion) {
    use byteorder::{BigEndian, WriteBytesExt};
    use swarm_tracker::udp::enums::request::Request;
    use swarm_tracker::udp::udp::PROTOCOL_IDENTIFIER;

    let mut packet = vec![];
    packet.write_u64::<BigEndian>(PROTOCOL_IDENTIFIER).unwrap();
    packet.write_u32::<BigEndian>(0).unwrap(); // Connect action
    packet.write_u32::<BigEndian>(12345).unwrap(); // Transaction ID

    c.bench_function("udp_connect_request_parse", |b| {
        b.iter(|| black_box(Request::from_bytes(&packet[..])));
    });
}

fn bench_announce_pipeline(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let tracker = create_tracker();
    let info_hash = random_info_hash();
    rt.block_on(async {
        tracker.sqlx.save_file(&TorrentFile {
            id: 0,
            info_hash: info_hash.to_string(),
            verified: true,
            created_at: 0,
            updated_at: 0,
        }).await.unwrap();
        for host in 0..500 {
            tracker.announce(Transport::Http, 0, &announce_query(info_hash, host)).await;
        }
        tracker.background.drain().await;
    });

    let query = announce_query(info_hash, 1);
    c.bench_function("http_announce_500_peers", |b| {
        b.iter(|| rt.block_on(async { black_box(tracker.announce(Transport::Http, 0, &query).await) }));
    });
    rt.block_on(tracker.background.drain());
}

criterion_group!(
    benches,
    bench_query_parsing,
    bench_announce_formatting,
    bench_udp_packet_parsing,
    bench_announce_pipeline,
);

criterion_main!(benches);
