//! Channel live object - a text channel, DM, or category

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Guild;
use crate::value_objects::Snowflake;

/// Channel kind - the runtime type distinguishing direct-message
/// channels from other channel kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Guild text channel
    #[default]
    Text,
    /// Direct message between users
    Dm,
    /// Guild category for organizing channels
    Category,
}

impl ChannelKind {
    /// Check if this kind is a DM channel
    #[inline]
    pub fn is_dm(self) -> bool {
        matches!(self, Self::Dm)
    }
}

/// A live channel as returned by a directory lookup
///
/// DM channels carry no guild backreference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveChannel {
    pub id: Snowflake,
    pub name: String,
    pub kind: ChannelKind,
    pub guild: Option<Arc<Guild>>,
}

impl LiveChannel {
    /// Create a new guild text channel
    pub fn text(id: Snowflake, guild: Arc<Guild>, name: String) -> Self {
        Self {
            id,
            name,
            kind: ChannelKind::Text,
            guild: Some(guild),
        }
    }

    /// Create a new DM channel, named after its recipient
    pub fn dm(id: Snowflake, name: String) -> Self {
        Self {
            id,
            name,
            kind: ChannelKind::Dm,
            guild: None,
        }
    }

    /// Create a new category channel
    pub fn category(id: Snowflake, guild: Arc<Guild>, name: String) -> Self {
        Self {
            id,
            name,
            kind: ChannelKind::Category,
            guild: Some(guild),
        }
    }

    /// Platform-native mention string for this channel
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }

    /// Check if this is a DM channel
    #[inline]
    pub fn is_dm(&self) -> bool {
        self.kind.is_dm()
    }

    /// Get the guild backreference, absent for DM channels
    pub fn guild(&self) -> Option<&Arc<Guild>> {
        self.guild.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild() -> Arc<Guild> {
        Arc::new(Guild::new(Snowflake::new(100), "guild".to_string()))
    }

    #[test]
    fn test_text_channel() {
        let channel = LiveChannel::text(Snowflake::new(1), guild(), "general".to_string());
        assert!(!channel.is_dm());
        assert!(channel.guild().is_some());
        assert_eq!(channel.mention(), "<#1>");
    }

    #[test]
    fn test_dm_channel() {
        let channel = LiveChannel::dm(Snowflake::new(2), "alice".to_string());
        assert!(channel.is_dm());
        assert!(channel.guild().is_none());
    }

    #[test]
    fn test_category_channel() {
        let channel = LiveChannel::category(Snowflake::new(3), guild(), "Text Channels".to_string());
        assert!(!channel.is_dm());
        assert_eq!(channel.kind, ChannelKind::Category);
    }

    #[test]
    fn test_channel_kind_serde() {
        let json = serde_json::to_string(&ChannelKind::Dm).unwrap();
        assert_eq!(json, "\"dm\"");

        let kind: ChannelKind = serde_json::from_str("\"category\"").unwrap();
        assert_eq!(kind, ChannelKind::Category);
    }
}
