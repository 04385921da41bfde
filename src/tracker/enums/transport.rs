/// Which transport a request arrived on; selects the response formatter.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Transport {
    Http,
    Udp { transaction_id: u32 },
}
