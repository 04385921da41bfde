#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ErrorResponse {
    pub action: u32,
    pub transaction_id: u32,
    pub message: String,
}
