//! Token resolution: opaque token -> active profile.

use std::sync::Arc;

use crate::error::{DisclosureError, DisclosureResult};
use crate::profile::Profile;
use crate::storage::ProfileStore;

/// Resolves public tokens against the profile store.
#[derive(Clone)]
pub struct TokenResolver {
    profiles: Arc<dyn ProfileStore>,
}

impl TokenResolver {
    /// Create a resolver over the given profile store.
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Resolve a token to the full profile record.
    ///
    /// The record is fetched eagerly with both tiers of fields; what gets
    /// disclosed is decided downstream by the assembler, never here.
    ///
    /// # Errors
    /// `MissingToken` for an empty token (a client error, not a miss);
    /// `ProfileNotFound` for unknown, revoked, and ambiguous tokens
    /// uniformly, so the error surface leaks nothing an enumerating
    /// caller could use; `Upstream` when the store fails.
    pub fn resolve(&self, token: &str) -> DisclosureResult<Profile> {
        if token.is_empty() {
            return Err(DisclosureError::MissingToken);
        }

        self.profiles
            .find_by_active_token(token)?
            .ok_or(DisclosureError::ProfileNotFound)
    }
}
