//! Channel record - immutable snapshot of a resolved channel

use std::sync::Arc;

use roster_core::{Guild, LiveChannel, Snowflake};

/// Immutable channel snapshot
///
/// The direct-message flag is fixed at construction time: supplied
/// explicitly, derived from a resolved live channel, or left unknown.
/// It is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    id: Snowflake,
    name: String,
    is_dm: Option<bool>,
    guild: Option<Arc<Guild>>,
    channel: Option<Arc<LiveChannel>>,
}

impl ChannelRecord {
    pub(crate) fn new(
        id: Snowflake,
        name: String,
        is_dm: Option<bool>,
        guild: Option<Arc<Guild>>,
        channel: Option<Arc<LiveChannel>>,
    ) -> Self {
        Self {
            id,
            name,
            is_dm,
            guild,
            channel,
        }
    }

    /// Record with no live reference and no stored scope
    pub(crate) fn detached(id: Snowflake, name: String, is_dm: Option<bool>) -> Self {
        Self::new(id, name, is_dm, None, None)
    }

    /// Wrap a live channel the caller already obtained. Never fails; the
    /// direct-message flag comes from the channel's runtime kind.
    pub fn from_live(channel: Arc<LiveChannel>) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone(),
            is_dm: Some(channel.is_dm()),
            guild: channel.guild().cloned(),
            channel: Some(channel),
        }
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a direct-message channel, if known
    pub fn is_dm(&self) -> Option<bool> {
        self.is_dm
    }

    /// Platform-native mention string when a live channel was resolved,
    /// otherwise the plain name
    pub fn mention(&self) -> String {
        match &self.channel {
            Some(channel) => channel.mention(),
            None => self.name.clone(),
        }
    }

    /// The guild this channel was resolved in: the stored scope first,
    /// else the live channel's own guild (absent for DM channels)
    pub fn guild(&self) -> Option<&Arc<Guild>> {
        self.guild
            .as_ref()
            .or_else(|| self.channel.as_ref().and_then(|c| c.guild()))
    }

    /// The live channel, absent if resolution failed or was skipped
    pub fn channel(&self) -> Option<&Arc<LiveChannel>> {
        self.channel.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(id: u64, name: &str) -> Arc<Guild> {
        Arc::new(Guild::new(Snowflake::new(id), name.to_string()))
    }

    #[test]
    fn test_mention_falls_back_to_name() {
        let record = ChannelRecord::detached(Snowflake::new(9), "general".to_string(), None);
        assert_eq!(record.mention(), "general");
        assert!(record.channel().is_none());
        assert!(record.is_dm().is_none());
    }

    #[test]
    fn test_mention_uses_live_channel() {
        let channel = Arc::new(LiveChannel::text(
            Snowflake::new(9),
            guild(1, "home"),
            "general".to_string(),
        ));
        let record = ChannelRecord::new(
            Snowflake::new(9),
            "general".to_string(),
            Some(false),
            None,
            Some(channel),
        );
        assert_eq!(record.mention(), "<#9>");
    }

    #[test]
    fn test_guild_prefers_stored_scope() {
        let channel = Arc::new(LiveChannel::text(
            Snowflake::new(9),
            guild(2, "other"),
            "general".to_string(),
        ));
        let record = ChannelRecord::new(
            Snowflake::new(9),
            "general".to_string(),
            Some(false),
            Some(guild(1, "home")),
            Some(channel),
        );
        assert_eq!(record.guild().unwrap().id, Snowflake::new(1));
    }

    #[test]
    fn test_guild_absent_for_detached_dm() {
        let channel = Arc::new(LiveChannel::dm(Snowflake::new(9), "alice".to_string()));
        let record = ChannelRecord::new(
            Snowflake::new(9),
            "alice".to_string(),
            Some(true),
            None,
            Some(channel),
        );
        assert!(record.guild().is_none());
    }

    #[test]
    fn test_from_live_dm_channel() {
        let channel = Arc::new(LiveChannel::dm(Snowflake::new(9), "alice".to_string()));
        let record = ChannelRecord::from_live(channel);

        assert_eq!(record.is_dm(), Some(true));
        assert!(record.guild().is_none());
        assert_eq!(record.mention(), "<#9>");
    }

    #[test]
    fn test_from_live_text_channel() {
        let channel = Arc::new(LiveChannel::text(
            Snowflake::new(9),
            guild(1, "home"),
            "general".to_string(),
        ));
        let record = ChannelRecord::from_live(channel);

        assert_eq!(record.is_dm(), Some(false));
        assert_eq!(record.name(), "general");
        assert_eq!(record.guild().unwrap().id, Snowflake::new(1));
    }
}
