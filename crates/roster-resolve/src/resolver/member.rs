//! Member resolver

use std::sync::Arc;

use roster_core::{Guild, LiveMember, Snowflake};
use tracing::{instrument, warn};

use crate::record::MemberRecord;

use super::context::ResolverContext;
use super::error::{EntityKind, ResolveError, ResolveResult};
use super::scope::ScopeContext;

/// Member resolver
pub struct MemberResolver<'a> {
    ctx: &'a ResolverContext,
}

impl<'a> MemberResolver<'a> {
    /// Create a new MemberResolver
    pub fn new(ctx: &'a ResolverContext) -> Self {
        Self { ctx }
    }

    /// Resolve an (id, name, scope) triple into a member record
    ///
    /// With no scope, the name is mandatory and the record is detached
    /// (no live reference, no stored guild). With a scope, one live
    /// lookup runs; a miss is tolerated as long as a name is available
    /// by other means.
    #[instrument(skip(self))]
    pub async fn build(
        &self,
        id: Snowflake,
        name: Option<&str>,
        scope: Option<ScopeContext>,
    ) -> ResolveResult<MemberRecord> {
        // An empty name cannot back a record; treat it as absent
        let name = name.filter(|n| !n.is_empty());

        let Some(scope) = scope else {
            let Some(name) = name else {
                return Err(ResolveError::MissingNameAndScope {
                    kind: EntityKind::Member,
                    id,
                });
            };
            return Ok(MemberRecord::detached(id, name.to_string()));
        };

        let guild = Arc::clone(scope.guild());
        let member = self.resolve(id, &guild).await?;

        let name = match (name, member.as_ref()) {
            (Some(name), _) => name.to_string(),
            (None, Some(member)) => member.name.clone(),
            (None, None) => {
                return Err(ResolveError::Unresolved {
                    kind: EntityKind::Member,
                    id,
                    request: scope.into_request(),
                });
            }
        };

        Ok(MemberRecord::new(id, name, Some(guild), member))
    }

    /// One directory call for `id` within `guild`
    ///
    /// A miss is an expected outcome (members leave); it is logged at
    /// warning level and returned as absent. Any other directory failure
    /// is fatal to the call.
    pub async fn resolve(
        &self,
        id: Snowflake,
        guild: &Guild,
    ) -> ResolveResult<Option<Arc<LiveMember>>> {
        match self.ctx.directory().find_member(guild.id, id).await {
            Ok(Some(member)) => Ok(Some(member)),
            Ok(None) => {
                warn!(
                    user_id = %id,
                    guild_name = %guild.name,
                    guild_id = %guild.id,
                    "member not found in directory, not resolving"
                );
                Ok(None)
            }
            Err(source) => Err(ResolveError::Lookup {
                kind: EntityKind::Member,
                id,
                source,
            }),
        }
    }
}
