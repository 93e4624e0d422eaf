//! Entity resolvers
//!
//! Resolvers centralize the id/name/scope fallback policy: one live
//! lookup per build, benign misses logged and tolerated, provider
//! failures surfaced.

pub mod channel;
pub mod context;
pub mod error;
pub mod member;
pub mod scope;

// Re-export all resolver types for convenience
pub use channel::ChannelResolver;
pub use context::ResolverContext;
pub use error::{EntityKind, ResolveError, ResolveResult};
pub use member::MemberResolver;
pub use scope::{RequestContext, ScopeContext};
