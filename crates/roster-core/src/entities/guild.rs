//! Guild entity - the scope within which ids resolve to live objects

use crate::value_objects::Snowflake;

/// Guild (server) scope object
///
/// Lookups always happen within a guild; its `name` and `id` are what
/// diagnostic logging reports when a lookup comes back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
}

impl Guild {
    /// Create a new Guild
    pub fn new(id: Snowflake, name: String) -> Self {
        Self { id, name }
    }
}
