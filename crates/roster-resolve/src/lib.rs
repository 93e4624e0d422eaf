//! # roster-resolve
//!
//! Application layer: resolvers that turn an (id, name, scope) triple into
//! an immutable entity record, with one centralized fallback policy.

pub mod record;
pub mod resolver;

// Re-export commonly used types at crate root
pub use record::{ChannelRecord, MemberRecord};
pub use resolver::{
    ChannelResolver, EntityKind, MemberResolver, RequestContext, ResolveError, ResolveResult,
    ResolverContext, ScopeContext,
};
