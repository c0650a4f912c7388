//! Error types for IceLink.
//!
//! The public disclosure path exposes a deliberately coarse taxonomy:
//! unknown, revoked, and structurally impossible tokens all collapse to
//! the same not-found error so an anonymous caller cannot enumerate
//! tokens or distinguish operational failures from missing data.

use thiserror::Error;

use crate::storage::StorageError;

/// Top-level error type for the disclosure path.
///
/// Every variant maps to exactly one client-visible status at the HTTP
/// boundary; none carries internal detail a caller could use as a side
/// channel.
#[derive(Debug, Error)]
pub enum DisclosureError {
    /// The token query parameter was absent or empty.
    #[error("Missing token")]
    MissingToken,

    /// The token did not resolve to exactly one active profile.
    ///
    /// Covers unknown, revoked, and ambiguous tokens uniformly.
    #[error("Profile not found")]
    ProfileNotFound,

    /// A backing store call failed.
    #[error("upstream store failure: {0}")]
    Upstream(#[from] StorageError),

    /// Resolution exceeded its deadline.
    #[error("resolution timed out after {duration_ms}ms")]
    Timeout {
        /// The configured deadline in milliseconds.
        duration_ms: u64,
    },
}

impl DisclosureError {
    /// Returns true if this is the client-input error.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        matches!(self, Self::MissingToken)
    }

    /// Returns true if this is the not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound)
    }

    /// Returns true if this error reflects an unavailable backing store
    /// (failure or deadline expiry) rather than request content.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Timeout { .. })
    }
}

/// Result type alias for disclosure operations.
pub type DisclosureResult<T> = Result<T, DisclosureError>;
