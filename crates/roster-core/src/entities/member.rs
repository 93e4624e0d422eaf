//! Member live object - a currently valid, provider-backed guild member

use std::sync::Arc;

use crate::entities::Guild;
use crate::value_objects::Snowflake;

/// A live guild member as returned by a directory lookup
///
/// The guild backreference is an `Arc` handle shared with the directory's
/// own cache; live objects never point at resolved records, so no
/// reference cycle can form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveMember {
    pub id: Snowflake,
    pub name: String,
    pub nickname: Option<String>,
    pub guild: Arc<Guild>,
}

impl LiveMember {
    /// Create a new LiveMember
    pub fn new(id: Snowflake, name: String, guild: Arc<Guild>) -> Self {
        Self {
            id,
            name,
            nickname: None,
            guild,
        }
    }

    /// Platform-native mention string for this member
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// Get display name (nickname if set, otherwise the account name)
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild() -> Arc<Guild> {
        Arc::new(Guild::new(Snowflake::new(100), "guild".to_string()))
    }

    #[test]
    fn test_member_creation() {
        let member = LiveMember::new(Snowflake::new(200), "alice".to_string(), guild());
        assert_eq!(member.id, Snowflake::new(200));
        assert_eq!(member.guild.id, Snowflake::new(100));
        assert!(member.nickname.is_none());
    }

    #[test]
    fn test_member_mention() {
        let member = LiveMember::new(Snowflake::new(200), "alice".to_string(), guild());
        assert_eq!(member.mention(), "<@200>");
    }

    #[test]
    fn test_display_name() {
        let mut member = LiveMember::new(Snowflake::new(200), "alice".to_string(), guild());
        assert_eq!(member.display_name(), "alice");

        member.nickname = Some("Ali".to_string());
        assert_eq!(member.display_name(), "Ali");
    }
}
