//! Scope inputs for resolver builds

use std::sync::Arc;

use roster_core::{Guild, Snowflake};

/// The slice of a command invocation the bot runtime hands over
///
/// Carried in resolution errors for diagnostics; the resolvers only
/// ever read the guild out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub guild: Arc<Guild>,
    pub invoker_id: Snowflake,
    pub invoker_name: String,
}

impl RequestContext {
    /// Create a new RequestContext
    pub fn new(guild: Arc<Guild>, invoker_id: Snowflake, invoker_name: String) -> Self {
        Self {
            guild,
            invoker_id,
            invoker_name,
        }
    }
}

/// Scope input for a build: a guild directly, or a request context that
/// carries one
///
/// Extracted exactly once at the top of `build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeContext {
    Guild(Arc<Guild>),
    Request(RequestContext),
}

impl ScopeContext {
    /// The guild this scope resolves within
    pub fn guild(&self) -> &Arc<Guild> {
        match self {
            Self::Guild(guild) => guild,
            Self::Request(request) => &request.guild,
        }
    }

    /// The request context, when this scope came from one
    pub fn into_request(self) -> Option<RequestContext> {
        match self {
            Self::Guild(_) => None,
            Self::Request(request) => Some(request),
        }
    }
}

impl From<Arc<Guild>> for ScopeContext {
    fn from(guild: Arc<Guild>) -> Self {
        Self::Guild(guild)
    }
}

impl From<RequestContext> for ScopeContext {
    fn from(request: RequestContext) -> Self {
        Self::Request(request)
    }
}
