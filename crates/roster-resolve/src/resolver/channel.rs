//! Channel resolver

use std::sync::Arc;

use roster_core::{Guild, LiveChannel, Snowflake};
use tracing::{instrument, warn};

use crate::record::ChannelRecord;

use super::context::ResolverContext;
use super::error::{EntityKind, ResolveError, ResolveResult};
use super::scope::ScopeContext;

/// Channel resolver
pub struct ChannelResolver<'a> {
    ctx: &'a ResolverContext,
}

impl<'a> ChannelResolver<'a> {
    /// Create a new ChannelResolver
    pub fn new(ctx: &'a ResolverContext) -> Self {
        Self { ctx }
    }

    /// Resolve an (id, name, scope) triple into a channel record
    ///
    /// Mirrors the member policy; in addition, a direct-message flag
    /// left unset is derived from a resolved live channel's kind and
    /// fixed from then on.
    #[instrument(skip(self))]
    pub async fn build(
        &self,
        id: Snowflake,
        name: Option<&str>,
        is_dm: Option<bool>,
        scope: Option<ScopeContext>,
    ) -> ResolveResult<ChannelRecord> {
        // An empty name cannot back a record; treat it as absent
        let name = name.filter(|n| !n.is_empty());

        let Some(scope) = scope else {
            let Some(name) = name else {
                return Err(ResolveError::MissingNameAndScope {
                    kind: EntityKind::Channel,
                    id,
                });
            };
            return Ok(ChannelRecord::detached(id, name.to_string(), is_dm));
        };

        let guild = Arc::clone(scope.guild());
        let channel = self.resolve(id, &guild).await?;

        let name = match (name, channel.as_ref()) {
            (Some(name), _) => name.to_string(),
            (None, Some(channel)) => channel.name.clone(),
            (None, None) => {
                return Err(ResolveError::Unresolved {
                    kind: EntityKind::Channel,
                    id,
                    request: scope.into_request(),
                });
            }
        };

        // A supplied flag wins; otherwise a resolved channel fixes it
        let is_dm = is_dm.or_else(|| channel.as_ref().map(|c| c.is_dm()));

        Ok(ChannelRecord::new(id, name, is_dm, Some(guild), channel))
    }

    /// One directory call for `id` within `guild`
    ///
    /// A miss is an expected outcome (channels get deleted); it is
    /// logged at warning level and returned as absent. Any other
    /// directory failure is fatal to the call.
    pub async fn resolve(
        &self,
        id: Snowflake,
        guild: &Guild,
    ) -> ResolveResult<Option<Arc<LiveChannel>>> {
        match self.ctx.directory().find_channel(guild.id, id).await {
            Ok(Some(channel)) => Ok(Some(channel)),
            Ok(None) => {
                warn!(
                    channel_id = %id,
                    guild_name = %guild.name,
                    guild_id = %guild.id,
                    "channel not found in directory, not resolving"
                );
                Ok(None)
            }
            Err(source) => Err(ResolveError::Lookup {
                kind: EntityKind::Channel,
                id,
                source,
            }),
        }
    }
}
