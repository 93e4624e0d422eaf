//! Directory port - id -> live object lookups within a scope
//!
//! The domain layer defines what it needs; the platform integration
//! provides the implementation. Live objects come back as `Arc` handles
//! owned by the provider's cache, never by the caller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{LiveChannel, LiveMember};
use crate::error::DirectoryError;
use crate::value_objects::Snowflake;

/// Result type for directory lookups
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Id -> live object lookups within a guild
///
/// `Ok(None)` means the directory has no such entity. That outcome is
/// expected and common: live directories go stale as users leave and
/// channels are deleted. Every `Err` is a real provider failure
/// (transport, auth, timeout) and must stay visible to callers.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Fetch the live member for `id` within a guild
    async fn find_member(
        &self,
        guild_id: Snowflake,
        id: Snowflake,
    ) -> DirectoryResult<Option<Arc<LiveMember>>>;

    /// Fetch the live channel for `id` within a guild
    async fn find_channel(
        &self,
        guild_id: Snowflake,
        id: Snowflake,
    ) -> DirectoryResult<Option<Arc<LiveChannel>>>;
}
