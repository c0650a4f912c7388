//! Emergency contacts.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileId;

/// A person to call on the profile owner's behalf.
///
/// Priority 1 is the primary contact and is disclosed in every tier when
/// present. Priority 2 is disclosed only under a paid entitlement.
/// Higher priorities are stored and read but not yet disclosed anywhere;
/// they are reserved for future tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// The profile this contact belongs to.
    pub profile_id: ProfileId,
    /// Positive disclosure rank; 1 is primary.
    pub priority: u32,
    /// Contact name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
}

impl EmergencyContact {
    /// Creates a contact.
    #[must_use]
    pub fn new(
        profile_id: ProfileId,
        priority: u32,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            profile_id,
            priority,
            name: name.into(),
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_new() {
        let profile = ProfileId::new();
        let contact = EmergencyContact::new(profile, 1, "Ana", "+27 82 000 0000");
        assert_eq!(contact.profile_id, profile);
        assert_eq!(contact.priority, 1);
        assert_eq!(contact.name, "Ana");
    }

    #[test]
    fn test_contact_serde_roundtrip() {
        let contact = EmergencyContact::new(ProfileId::new(), 2, "Ben", "555-0001");
        let json = serde_json::to_string(&contact).unwrap();
        let back: EmergencyContact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }
}
