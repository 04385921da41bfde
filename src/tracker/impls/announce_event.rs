use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps the textual HTTP form. Unknown values are treated as a regular update.
    pub fn from_query(value: &str) -> AnnounceEvent {
        match value.to_lowercase().as_str() {
            "completed" => AnnounceEvent::Completed,
            "started" => AnnounceEvent::Started,
            "stopped" => AnnounceEvent::Stopped,
            _ => AnnounceEvent::None
        }
    }

    pub fn from_udp(value: u32) -> Option<AnnounceEvent> {
        match value {
            0 => Some(AnnounceEvent::None),
            1 => Some(AnnounceEvent::Completed),
            2 => Some(AnnounceEvent::Started),
            3 => Some(AnnounceEvent::Stopped),
            _ => None
        }
    }

    pub fn to_udp(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::None => "",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped"
        }
    }
}
