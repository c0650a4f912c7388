//! Abstract storage traits for the disclosure path.
//!
//! These traits define the contract that backing stores must implement.
//! By using traits, we enable:
//! - In-memory backends for testing and embedded use
//! - A real database client in production
//!
//! Each trait covers exactly the capability one resolver needs, and the
//! three read disjoint data, so a backend may shard them freely.

use thiserror::Error;

use crate::contact::EmergencyContact;
use crate::profile::{AccountId, Profile, ProfileId};
use crate::subscription::Subscription;

/// Errors that can occur during storage operations.
///
/// Absence of a record is not an error; the read methods return `Option`
/// or an empty list for that. These variants are infrastructure failures
/// only.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend failure (poisoned lock, connection refused, ...).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Stored or seeded data could not be decoded.
    #[error("storage serialization error: {0}")]
    Serialization(String),

    /// Filesystem failure while loading seed data.
    #[error("storage io error: {0}")]
    Io(String),
}

/// Read contract for the token resolver.
pub trait ProfileStore: Send + Sync {
    /// Resolve an opaque token to its profile.
    ///
    /// The query itself filters on token status, so a revoked token is
    /// indistinguishable from an unknown one. Returns the full profile
    /// record - tier filtering is the assembler's job, never the store's.
    ///
    /// Returns `Ok(None)` unless exactly one active token row matches.
    fn find_by_active_token(&self, token: &str) -> Result<Option<Profile>, StorageError>;
}

/// Read contract for the contact resolver.
pub trait ContactStore: Send + Sync {
    /// List a profile's emergency contacts, ascending by priority.
    ///
    /// A profile with no contacts yields an empty list, not an error.
    fn list_by_profile(
        &self,
        profile_id: ProfileId,
    ) -> Result<Vec<EmergencyContact>, StorageError>;
}

/// Read contract for the entitlement resolver.
pub trait SubscriptionStore: Send + Sync {
    /// Fetch the subscription row for an account, if one exists.
    ///
    /// Most accounts have none; that is `Ok(None)`.
    fn find_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Subscription>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: ensure traits are object-safe
    fn _assert_profile_store_object_safe(_: &dyn ProfileStore) {}
    fn _assert_contact_store_object_safe(_: &dyn ContactStore) {}
    fn _assert_subscription_store_object_safe(_: &dyn SubscriptionStore) {}

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Backend("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = StorageError::Serialization("bad json".to_string());
        assert!(err.to_string().contains("bad json"));
    }
}
