#[derive(Clone, Copy, Debug, Default)]
pub struct BencodeFormatter;
