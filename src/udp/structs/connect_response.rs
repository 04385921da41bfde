#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ConnectResponse {
    pub action: u32,
    pub transaction_id: u32,
    pub connection_id: u64,
}
