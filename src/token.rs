//! Public tokens - the sole access credential for anonymous disclosure.
//!
//! A token is an opaque, unguessable string bound 1:1 to a profile at
//! issuance. Revoking it kills disclosure immediately without touching
//! the profile data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::ProfileId;

/// Lifecycle state of a public token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStatus {
    /// The token resolves to its profile.
    Active,
    /// The token is dead; resolution treats it as nonexistent.
    Revoked,
}

/// An opaque public token bound to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicToken {
    /// The opaque token value printed on the physical tag.
    pub token: String,
    /// The profile this token discloses.
    pub profile_id: ProfileId,
    /// Current lifecycle state.
    pub status: TokenStatus,
}

impl PublicToken {
    /// Creates an active token with an explicit value.
    #[must_use]
    pub fn new(token: impl Into<String>, profile_id: ProfileId) -> Self {
        Self {
            token: token.into(),
            profile_id,
            status: TokenStatus::Active,
        }
    }

    /// Issues a fresh token with a random unguessable value.
    #[must_use]
    pub fn issue(profile_id: ProfileId) -> Self {
        Self::new(Uuid::new_v4().simple().to_string(), profile_id)
    }

    /// Marks the token revoked.
    pub fn revoke(&mut self) {
        self.status = TokenStatus::Revoked;
    }

    /// Returns true if the token currently resolves.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, TokenStatus::Active)
    }
}
