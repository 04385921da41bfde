use serde::{Deserialize, Serialize};

/// An allowed client, matched as a prefix of the `client` (User-Agent) value.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct WhitelistEntry {
    pub client_prefix: String,
    pub name: String,
}
