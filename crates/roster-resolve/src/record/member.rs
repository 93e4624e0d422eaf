//! Member record - immutable snapshot of a resolved member

use std::sync::Arc;

use roster_core::{Guild, LiveMember, Snowflake};

/// Immutable member snapshot
///
/// Constructed only through `MemberResolver::build` or [`from_live`];
/// no field changes after construction.
///
/// [`from_live`]: MemberRecord::from_live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    id: Snowflake,
    name: String,
    guild: Option<Arc<Guild>>,
    member: Option<Arc<LiveMember>>,
}

impl MemberRecord {
    pub(crate) fn new(
        id: Snowflake,
        name: String,
        guild: Option<Arc<Guild>>,
        member: Option<Arc<LiveMember>>,
    ) -> Self {
        Self {
            id,
            name,
            guild,
            member,
        }
    }

    /// Record with no live reference and no stored scope
    pub(crate) fn detached(id: Snowflake, name: String) -> Self {
        Self::new(id, name, None, None)
    }

    /// Wrap a live member the caller already obtained (e.g. from an
    /// incoming event). Never fails.
    pub fn from_live(member: Arc<LiveMember>) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            guild: Some(Arc::clone(&member.guild)),
            member: Some(member),
        }
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform-native mention string when a live member was resolved,
    /// otherwise the plain name
    pub fn mention(&self) -> String {
        match &self.member {
            Some(member) => member.mention(),
            None => self.name.clone(),
        }
    }

    /// The guild this member was resolved in: the stored scope first,
    /// else the live member's own guild
    pub fn guild(&self) -> Option<&Arc<Guild>> {
        self.guild
            .as_ref()
            .or_else(|| self.member.as_ref().map(|m| &m.guild))
    }

    /// The live member, absent if resolution failed or was skipped
    pub fn member(&self) -> Option<&Arc<LiveMember>> {
        self.member.as_ref()
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
        let record = MemberRecord::detached(Snowflake::new(42), "alice".to_string());
        assert_eq!(record.mention(), "alice");
        assert!(record.member().is_none());
        assert!(record.guild().is_none());
    }

    #[test]
    fn test_mention_uses_live_member() {
        let member = Arc::new(LiveMember::new(
            Snowflake::new(42),
            "alice".to_string(),
            guild(1, "home"),
        ));
        let record = MemberRecord::new(
            Snowflake::new(42),
            "alice".to_string(),
            None,
            Some(member),
        );
        assert_eq!(record.mention(), "<@42>");
    }

    #[test]
    fn test_guild_prefers_stored_scope() {
        let member = Arc::new(LiveMember::new(
            Snowflake::new(42),
            "alice".to_string(),
            guild(2, "other"),
        ));
        let record = MemberRecord::new(
            Snowflake::new(42),
            "alice".to_string(),
            Some(guild(1, "home")),
            Some(member),
        );
        assert_eq!(record.guild().unwrap().id, Snowflake::new(1));
    }

    #[test]
    fn test_guild_derived_from_live_member() {
        let member = Arc::new(LiveMember::new(
            Snowflake::new(42),
            "alice".to_string(),
            guild(2, "other"),
        ));
        let record = MemberRecord::new(
            Snowflake::new(42),
            "alice".to_string(),
            None,
            Some(member),
        );
        assert_eq!(record.guild().unwrap().id, Snowflake::new(2));
    }

    #[test]
    fn test_from_live() {
        let member = Arc::new(LiveMember::new(
            Snowflake::new(42),
            "alice".to_string(),
            guild(1, "home"),
        ));
        let record = MemberRecord::from_live(Arc::clone(&member));

        assert_eq!(record.id(), Snowflake::new(42));
        assert_eq!(record.name(), "alice");
        assert_eq!(record.mention(), "<@42>");
        assert_eq!(record.guild().unwrap().id, Snowflake::new(1));
        assert_eq!(record.member(), Some(&member));
    }
}
