//! In-memory storage backend.
//!
//! Thread-safe in-memory implementations of the storage traits, intended
//! for the bundled server binary, tests, and as a reference
//! implementation of the read contracts. Write methods live on the
//! concrete types only: the public resolver sees nothing but the read
//! traits.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::contact::EmergencyContact;
use crate::profile::{AccountId, Profile, ProfileId};
use crate::storage::dataset::Dataset;
use crate::storage::traits::{
    ContactStore, ProfileStore, StorageError, SubscriptionStore,
};
use crate::subscription::Subscription;
use crate::token::PublicToken;

fn lock_err(context: &'static str) -> StorageError {
    StorageError::Backend(format!("poisoned lock: {context}"))
}

#[derive(Debug, Default)]
struct ProfileState {
    profiles: HashMap<ProfileId, Profile>,
    tokens: Vec<PublicToken>,
}

/// In-memory profile store, keyed by profile ID with a token table.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    state: RwLock<ProfileState>,
}

impl InMemoryProfileStore {
    /// Insert or replace a profile.
    ///
    /// # Errors
    /// `StorageError::Backend` if the lock is poisoned.
    pub fn insert_profile(&self, profile: Profile) -> Result<(), StorageError> {
        let mut state = self.state.write().map_err(|_| lock_err("profiles"))?;
        state.profiles.insert(profile.id, profile);
        Ok(())
    }

    /// Register a token row.
    ///
    /// The store does not enforce token uniqueness; resolution collapses
    /// ambiguous tokens to a miss instead (see `find_by_active_token`).
    ///
    /// # Errors
    /// `StorageError::Backend` if the lock is poisoned.
    pub fn insert_token(&self, token: PublicToken) -> Result<(), StorageError> {
        let mut state = self.state.write().map_err(|_| lock_err("tokens"))?;
        state.tokens.push(token);
        Ok(())
    }

    /// Flip every row carrying this token value to revoked.
    ///
    /// # Errors
    /// `StorageError::Backend` if the lock is poisoned.
    pub fn revoke_token(&self, token: &str) -> Result<(), StorageError> {
        let mut state = self.state.write().map_err(|_| lock_err("tokens"))?;
        for row in state.tokens.iter_mut().filter(|row| row.token == token) {
            row.revoke();
        }
        Ok(())
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn find_by_active_token(&self, token: &str) -> Result<Option<Profile>, StorageError> {
        let state = self.state.read().map_err(|_| lock_err("profiles"))?;

        let mut matched: Option<&PublicToken> = None;
        for row in state.tokens.iter().filter(|row| {
            row.is_active() && row.token == token
        }) {
            if matched.is_some() {
                // More than one active row: single-row semantics, no match.
                return Ok(None);
            }
            matched = Some(row);
        }

        Ok(matched.and_then(|row| state.profiles.get(&row.profile_id).cloned()))
    }
}

/// In-memory contact store, grouped by profile.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<HashMap<ProfileId, Vec<EmergencyContact>>>,
}

impl InMemoryContactStore {
    /// Add a contact for its profile.
    ///
    /// # Errors
    /// `StorageError::Backend` if the lock is poisoned.
    pub fn insert_contact(&self, contact: EmergencyContact) -> Result<(), StorageError> {
        let mut contacts = self.contacts.write().map_err(|_| lock_err("contacts"))?;
        contacts.entry(contact.profile_id).or_default().push(contact);
        Ok(())
    }
}

impl ContactStore for InMemoryContactStore {
    fn list_by_profile(
        &self,
        profile_id: ProfileId,
    ) -> Result<Vec<EmergencyContact>, StorageError> {
        let contacts = self.contacts.read().map_err(|_| lock_err("contacts"))?;
        let mut list = contacts.get(&profile_id).cloned().unwrap_or_default();
        list.sort_by_key(|contact| contact.priority);
        Ok(list)
    }
}

/// In-memory subscription store, keyed by account.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: RwLock<HashMap<AccountId, Subscription>>,
}

impl InMemorySubscriptionStore {
    /// Insert or replace the subscription row for its account.
    ///
    /// # Errors
    /// `StorageError::Backend` if the lock is poisoned.
    pub fn upsert_subscription(&self, subscription: Subscription) -> Result<(), StorageError> {
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|_| lock_err("subscriptions"))?;
        subscriptions.insert(subscription.account_id, subscription);
        Ok(())
    }
}

impl SubscriptionStore for InMemorySubscriptionStore {
    fn find_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Subscription>, StorageError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|_| lock_err("subscriptions"))?;
        Ok(subscriptions.get(&account_id).cloned())
    }
}

/// The full in-memory backend: one concrete store per read contract.
#[derive(Debug, Default)]
pub struct InMemoryStores {
    /// Profile and token table.
    pub profiles: InMemoryProfileStore,
    /// Emergency contacts.
    pub contacts: InMemoryContactStore,
    /// Subscriptions.
    pub subscriptions: InMemorySubscriptionStore,
}

impl InMemoryStores {
    /// Build a populated backend from seed data.
    ///
    /// # Errors
    /// `StorageError::Backend` if a lock is poisoned (cannot happen on a
    /// freshly built store, kept for contract uniformity).
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StorageError> {
        let stores = Self::default();
        for profile in dataset.profiles {
            stores.profiles.insert_profile(profile)?;
        }
        for token in dataset.tokens {
            stores.profiles.insert_token(token)?;
        }
        for contact in dataset.contacts {
            stores.contacts.insert_contact(contact)?;
        }
        for subscription in dataset.subscriptions {
            stores.subscriptions.upsert_subscription(subscription)?;
        }
        Ok(stores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenStatus;

    fn seeded_profile(store: &InMemoryProfileStore, token: &str) -> Profile {
        let profile = Profile::new(AccountId::new(), "Jo", "Doe");
        store.insert_profile(profile.clone()).unwrap();
        store
            .insert_token(PublicToken::new(token, profile.id))
            .unwrap();
        profile
    }

    #[test]
    fn test_find_by_active_token_hit() {
        let store = InMemoryProfileStore::default();
        let profile = seeded_profile(&store, "abc");

        let found = store.find_by_active_token("abc").unwrap().unwrap();
        assert_eq!(found.id, profile.id);
        assert_eq!(found.first_name, "Jo");
    }

    #[test]
    fn test_find_by_active_token_unknown() {
        let store = InMemoryProfileStore::default();
        seeded_profile(&store, "abc");
        assert!(store.find_by_active_token("nope").unwrap().is_none());
    }

    #[test]
    fn test_find_by_active_token_revoked() {
        let store = InMemoryProfileStore::default();
        seeded_profile(&store, "abc");
        store.revoke_token("abc").unwrap();
        assert!(store.find_by_active_token("abc").unwrap().is_none());
    }

    #[test]
    fn test_find_by_active_token_ambiguous() {
        let store = InMemoryProfileStore::default();
        seeded_profile(&store, "dup");
        let second = Profile::new(AccountId::new(), "Sam", "Lee");
        store.insert_profile(second.clone()).unwrap();
        store
            .insert_token(PublicToken::new("dup", second.id))
            .unwrap();

        // Two active rows for one value: no match at all.
        assert!(store.find_by_active_token("dup").unwrap().is_none());
    }

    #[test]
    fn test_find_by_active_token_dangling_profile() {
        let store = InMemoryProfileStore::default();
        store
            .insert_token(PublicToken::new("orphan", ProfileId::new()))
            .unwrap();
        assert!(store.find_by_active_token("orphan").unwrap().is_none());
    }

    #[test]
    fn test_revoke_token_flips_all_rows() {
        let store = InMemoryProfileStore::default();
        let profile = seeded_profile(&store, "abc");
        store
            .insert_token(PublicToken::new("abc", profile.id))
            .unwrap();
        store.revoke_token("abc").unwrap();

        let state = store.state.read().unwrap();
        assert!(state
            .tokens
            .iter()
            .all(|row| row.status == TokenStatus::Revoked));
    }

    #[test]
    fn test_contacts_ordered_by_priority() {
        let store = InMemoryContactStore::default();
        let profile = ProfileId::new();
        store
            .insert_contact(EmergencyContact::new(profile, 3, "Cal", "3"))
            .unwrap();
        store
            .insert_contact(EmergencyContact::new(profile, 1, "Ana", "1"))
            .unwrap();
        store
            .insert_contact(EmergencyContact::new(profile, 2, "Ben", "2"))
            .unwrap();

        let list = store.list_by_profile(profile).unwrap();
        let priorities: Vec<u32> = list.iter().map(|c| c.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }

    #[test]
    fn test_contacts_empty_for_unknown_profile() {
        let store = InMemoryContactStore::default();
        assert!(store.list_by_profile(ProfileId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_subscription_upsert_replaces() {
        let store = InMemorySubscriptionStore::default();
        let account = AccountId::new();
        store
            .upsert_subscription(Subscription::new(account, "active", None))
            .unwrap();
        store
            .upsert_subscription(Subscription::new(account, "canceled", None))
            .unwrap();

        let sub = store.find_by_account(account).unwrap().unwrap();
        assert_eq!(sub.status, "canceled");
    }

    #[test]
    fn test_subscription_absent_is_none() {
        let store = InMemorySubscriptionStore::default();
        assert!(store.find_by_account(AccountId::new()).unwrap().is_none());
    }
}
