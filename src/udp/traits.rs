/// Action-checked encode/decode shared by every UDP message.
pub mod wire_message;
