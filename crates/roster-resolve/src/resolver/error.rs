//! Resolver error types

use std::fmt;

use roster_common::AppError;
use roster_core::{DirectoryError, Snowflake};
use thiserror::Error;

use super::scope::RequestContext;

/// Which entity variant an operation was resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Member,
    Channel,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member => write!(f, "member"),
            Self::Channel => write!(f, "channel"),
        }
    }
}

/// Resolver errors
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Caller misuse: with no scope to resolve in, a name is mandatory
    #[error("no scope and no name supplied for {kind} {id}")]
    MissingNameAndScope { kind: EntityKind, id: Snowflake },

    /// The lookup found nothing and there is no fallback name
    #[error("failed to resolve {kind} {id} and no name provided")]
    Unresolved {
        kind: EntityKind,
        id: Snowflake,
        /// Originating request context, when the scope input carried one
        request: Option<RequestContext>,
    },

    /// The directory call itself failed
    #[error("directory lookup failed for {kind} {id}")]
    Lookup {
        kind: EntityKind,
        id: Snowflake,
        #[source]
        source: DirectoryError,
    },
}

impl ResolveError {
    /// The entity variant being resolved when the error occurred
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::MissingNameAndScope { kind, .. }
            | Self::Unresolved { kind, .. }
            | Self::Lookup { kind, .. } => *kind,
        }
    }

    /// The identifier being resolved when the error occurred
    pub fn id(&self) -> Snowflake {
        match self {
            Self::MissingNameAndScope { id, .. }
            | Self::Unresolved { id, .. }
            | Self::Lookup { id, .. } => *id,
        }
    }

    /// Caller supplied insufficient input; not retryable
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingNameAndScope { .. })
    }

    /// The live lookup failed, either silently or loudly
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Unresolved { .. } | Self::Lookup { .. })
    }

    /// Request context carried for diagnostics, when available
    pub fn request(&self) -> Option<&RequestContext> {
        match self {
            Self::Unresolved { request, .. } => request.as_ref(),
            _ => None,
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            e @ ResolveError::MissingNameAndScope { .. } => AppError::invalid_input(e),
            e @ ResolveError::Unresolved { .. } => AppError::not_found(e),
            ResolveError::Lookup { source, .. } => AppError::Directory(source),
        }
    }
}

/// Result type for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;
