/// A decoded request datagram.
pub mod request;
