use serde::{Deserialize, Serialize};

/// User id used for announces that carry no passkey.
pub const ANONYMOUS_USER_ID: i64 = 0;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct User {
    pub id: i64,
    /// 40 lowercase hex characters.
    pub passkey: String,
    pub enabled: bool,
    pub created_at: i64,
}
