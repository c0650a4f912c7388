//! Contact resolution: profile -> ordered emergency contacts.

use std::sync::Arc;

use crate::contact::EmergencyContact;
use crate::error::DisclosureResult;
use crate::profile::ProfileId;
use crate::storage::ContactStore;

/// Lists a profile's emergency contacts.
#[derive(Clone)]
pub struct ContactResolver {
    contacts: Arc<dyn ContactStore>,
}

impl ContactResolver {
    /// Create a resolver over the given contact store.
    #[must_use]
    pub fn new(contacts: Arc<dyn ContactStore>) -> Self {
        Self { contacts }
    }

    /// List contacts ascending by priority.
    ///
    /// Zero contacts is an empty list, never an error. The sequence may
    /// have gaps or duplicate priorities; selection downstream is by
    /// priority value, not position.
    ///
    /// # Errors
    /// `Upstream` when the store fails.
    pub fn list(&self, profile_id: ProfileId) -> DisclosureResult<Vec<EmergencyContact>> {
        Ok(self.contacts.list_by_profile(profile_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStores;

    #[test]
    fn test_list_empty_is_ok() {
        let stores = InMemoryStores::default();
        let resolver = ContactResolver::new(Arc::new(stores.contacts));
        assert!(resolver.list(ProfileId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_list_ascending() {
        let stores = InMemoryStores::default();
        let profile = ProfileId::new();
        stores
            .contacts
            .insert_contact(EmergencyContact::new(profile, 2, "Ben", "2"))
            .unwrap();
        stores
            .contacts
            .insert_contact(EmergencyContact::new(profile, 1, "Ana", "1"))
            .unwrap();
        let resolver = ContactResolver::new(Arc::new(stores.contacts));

        let list = resolver.list(profile).unwrap();
        assert_eq!(list[0].name, "Ana");
        assert_eq!(list[1].name, "Ben");
    }
}
