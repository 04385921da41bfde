#[derive(Clone, Copy, Debug)]
pub struct BinaryFormatter {
    pub(crate) transaction_id: u32,
}
