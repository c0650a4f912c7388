//! Seed data for the in-memory backend.
//!
//! The authenticated edit path that writes profiles, tokens, contacts,
//! and subscriptions is an external collaborator; a dataset file is its
//! stand-in at the storage boundary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contact::EmergencyContact;
use crate::profile::Profile;
use crate::storage::traits::StorageError;
use crate::subscription::Subscription;
use crate::token::PublicToken;

/// Everything needed to seed a disclosure backend.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Profile records.
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Token rows binding public values to profiles.
    #[serde(default)]
    pub tokens: Vec<PublicToken>,
    /// Emergency contacts.
    #[serde(default)]
    pub contacts: Vec<EmergencyContact>,
    /// Subscription rows.
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl Dataset {
    /// Decode a dataset from JSON bytes.
    ///
    /// # Errors
    /// `StorageError::Serialization` when the JSON does not match the
    /// dataset shape.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, StorageError> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Read and decode a dataset file.
    ///
    /// # Errors
    /// `StorageError::Io` when the file cannot be read,
    /// `StorageError::Serialization` when it cannot be decoded.
    pub fn from_json_file(path: &Path) -> Result<Self, StorageError> {
        let bytes = std::fs::read(path).map_err(|e| {
            StorageError::Io(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::AccountId;
    use crate::storage::memory::InMemoryStores;
    use crate::storage::traits::{ProfileStore, SubscriptionStore};

    #[test]
    fn test_empty_object_decodes() {
        let dataset = Dataset::from_json_slice(b"{}").unwrap();
        assert!(dataset.profiles.is_empty());
        assert!(dataset.tokens.is_empty());
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = Dataset::from_json_slice(b"{not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::from_json_file(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_roundtrip_through_file_and_stores() {
        let profile = Profile::new(AccountId::new(), "Jo", "Doe");
        let account = profile.account_id;
        let dataset = Dataset {
            tokens: vec![PublicToken::new("abc", profile.id)],
            contacts: vec![EmergencyContact::new(profile.id, 1, "Ana", "555-0001")],
            subscriptions: vec![Subscription::new(account, "active", None)],
            profiles: vec![profile],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, serde_json::to_vec(&dataset).unwrap()).unwrap();

        let loaded = Dataset::from_json_file(&path).unwrap();
        let stores = InMemoryStores::from_dataset(loaded).unwrap();

        let found = stores.profiles.find_by_active_token("abc").unwrap().unwrap();
        assert_eq!(found.first_name, "Jo");
        assert!(stores
            .subscriptions
            .find_by_account(account)
            .unwrap()
            .is_some());
    }
}
