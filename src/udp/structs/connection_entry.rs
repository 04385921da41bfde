use tokio::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct ConnectionEntry {
    pub connection_id: u64,
    pub issued_at: Instant,
}
