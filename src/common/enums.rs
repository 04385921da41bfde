/// Error returned by the compact peer codec and the UDP wire codec.
pub mod codec_error;
