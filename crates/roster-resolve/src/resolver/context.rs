//! Resolver context - dependency container for resolvers

use std::sync::Arc;

use roster_core::Directory;

/// Dependencies shared by the resolvers
///
/// Cheap to clone; the directory handle is the only dependency today and
/// is shared, not owned.
#[derive(Clone)]
pub struct ResolverContext {
    directory: Arc<dyn Directory>,
}

impl ResolverContext {
    /// Create a new resolver context
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    /// Get the directory port
    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }
}

impl std::fmt::Debug for ResolverContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverContext")
            .field("directory", &"Arc<dyn Directory>")
            .finish()
    }
}
