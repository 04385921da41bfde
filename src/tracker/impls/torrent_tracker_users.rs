use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user::ANONYMOUS_USER_ID;

impl TorrentTracker {
    /// Maps an optional passkey to the user id an announce is booked under.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn resolve_user(&self, passkey: Option<&str>) -> Result<i64, TrackerError>
    {
        match passkey {
            None if self.config.tracker_config.require_passkey => Err(TrackerError::PasskeyRequired),
            None => Ok(ANONYMOUS_USER_ID),
            Some(passkey) => {
                match self.sqlx.load_user_by_passkey(&passkey.to_lowercase()).await? {
                    Some(user) if user.enabled => Ok(user.id),
                    _ => Err(TrackerError::InvalidPasskey)
                }
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_whitelist(&self, client: &str) -> Result<(), TrackerError>
    {
        if !self.config.tracker_config.whitelist_enabled {
            return Ok(());
        }
        let allowed = self.sqlx.load_whitelist().await?
            .iter()
            .any(|entry| client.starts_with(entry.client_prefix.as_str()));
        match allowed {
            true => Ok(()),
            false => Err(TrackerError::ClientNotWhitelisted)
        }
    }
}
