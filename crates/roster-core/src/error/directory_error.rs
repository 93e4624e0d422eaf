//! Directory errors - failure taxonomy for the directory port
//!
//! "Not found" is NOT an error here: the port reports it as `Ok(None)`.
//! Every variant below is a real provider failure that must stay visible
//! to callers.

use thiserror::Error;

/// Directory provider failures
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request unauthorized: {0}")]
    Unauthorized(String),

    #[error("directory request timed out")]
    Timeout,

    #[error("directory transport error: {0}")]
    Transport(String),

    #[error("directory internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Get an error code string for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "DIRECTORY_UNAUTHORIZED",
            Self::Timeout => "DIRECTORY_TIMEOUT",
            Self::Transport(_) => "DIRECTORY_TRANSPORT",
            Self::Internal(_) => "DIRECTORY_INTERNAL",
        }
    }

    /// Check if this is an authorization failure
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this failure is transient (a later identical call may succeed)
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transport(_))
    }
}
