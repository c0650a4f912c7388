//! DisclosurePayload - the tier-shaped response for public resolution.
//!
//! The payload is a tagged union rather than a map with conditionally
//! present keys: the free tier and the paid tier are distinct variants,
//! and the paid medical block exists only on the paid variant. The JSON
//! shape itself is the enforcement mechanism - an unentitled response has
//! no `medical` key at all, not a `medical: null`.
//!
//! Serialization is untagged so the wire format stays flat:
//! `first_name`, `last_name`, `age`, `emergency_contact`, `is_paid`, and
//! (paid tier only) `medical`. Inside `medical`, unset fields serialize
//! as explicit nulls.

use serde::{Deserialize, Serialize};

use crate::contact::EmergencyContact;

/// The disclosed subset of an emergency contact: name and phone only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    /// Contact name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
}

impl From<&EmergencyContact> for ContactCard {
    fn from(contact: &EmergencyContact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// The paid-tier medical block.
///
/// Every field is always present on the wire, null when unset, so a
/// viewing client can render a stable layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalBlock {
    /// Known allergies.
    pub allergies: Option<String>,
    /// Chronic or acute conditions.
    pub conditions: Option<String>,
    /// Current medications.
    pub medications: Option<String>,
    /// Blood type.
    pub blood_type: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Physical description.
    pub physical_description: Option<String>,
    /// Notes for first responders.
    pub special_notes: Option<String>,
    /// Medical-aid provider.
    pub medical_aid_provider: Option<String>,
    /// Medical-aid policy number.
    pub medical_aid_policy_number: Option<String>,
    /// Primary spoken language.
    pub primary_language: Option<String>,
    /// Religion.
    pub religion: Option<String>,
    /// Additional notes.
    pub additional_notes: Option<String>,
    /// Secondary emergency contact, paid tier only.
    pub emergency_contact_2: Option<ContactCard>,
}

/// Fields disclosed to every viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicDisclosure {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whole years since birth, or null when unknown.
    pub age: Option<u32>,
    /// Primary emergency contact, or null when none is registered.
    pub emergency_contact: Option<ContactCard>,
    /// Always false on this variant; carried so the viewing client can
    /// explain why paid sections are absent.
    pub is_paid: bool,
}

/// The paid-tier response: everything in [`BasicDisclosure`] plus the
/// medical block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullDisclosure {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whole years since birth, or null when unknown.
    pub age: Option<u32>,
    /// Primary emergency contact, or null when none is registered.
    pub emergency_contact: Option<ContactCard>,
    /// Always true on this variant.
    pub is_paid: bool,
    /// The paid medical detail.
    pub medical: MedicalBlock,
}

/// The tier-shaped disclosure response.
///
/// `Full` must stay first: untagged deserialization tries variants in
/// order, and a paid payload (which carries `medical`) must not be read
/// back as `Basic` with the block silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisclosurePayload {
    /// Paid tier.
    Full(FullDisclosure),
    /// Free tier.
    Basic(BasicDisclosure),
}

impl DisclosurePayload {
    /// The entitlement flag carried in the payload.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        match self {
            Self::Full(full) => &full.first_name,
            Self::Basic(basic) => &basic.first_name,
        }
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        match self {
            Self::Full(full) => &full.last_name,
            Self::Basic(basic) => &basic.last_name,
        }
    }

    /// Computed age, if known.
    #[must_use]
    pub const fn age(&self) -> Option<u32> {
        match self {
            Self::Full(full) => full.age,
            Self::Basic(basic) => basic.age,
        }
    }

    /// Primary emergency contact, if registered.
    #[must_use]
    pub const fn emergency_contact(&self) -> Option<&ContactCard> {
        match self {
            Self::Full(full) => full.emergency_contact.as_ref(),
            Self::Basic(basic) => basic.emergency_contact.as_ref(),
        }
    }

    /// The medical block, present only on the paid tier.
    #[must_use]
    pub const fn medical(&self) -> Option<&MedicalBlock> {
        match self {
            Self::Full(full) => Some(&full.medical),
            Self::Basic(_) => None,
        }
    }
}
