use serde::{Deserialize, Serialize};

/// The `event` parameter of an announce. The discriminants are the UDP wire values.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum AnnounceEvent {
    #[default]
    None = 0,
    Completed = 1,
    Started = 2,
    Stopped = 3
}
