#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Packet {
    pub connection_id: u64,
    pub action: u32,
    pub transaction_id: u32,
}
