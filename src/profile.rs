//! Profile records and identity management.
//!
//! A profile is the medical record behind a public token. Its identity
//! never changes once created, and the owning account identity links it
//! to the subscription that decides the disclosure tier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique, stable profile identifier.
///
/// # Examples
///
/// ```
/// use icelink::ProfileId;
///
/// let id = ProfileId::new();
/// assert!(!id.is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Creates a new random profile ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a profile ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true if this is a nil (all zeros) UUID.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ProfileId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Identifier of the account that owns a profile.
///
/// Subscriptions belong to accounts, not profiles, so entitlement is
/// always resolved through this identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random account ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an account ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AccountId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// The medical record.
///
/// Name and date of birth are the only free-tier fields; everything else
/// is disclosed only under a paid entitlement. The date of birth is kept
/// as the raw registered string and parsed at assembly time, so a
/// malformed value degrades to "age unknown" instead of failing a
/// disclosure request.
///
/// Profiles are created once per account and mutated only through the
/// authenticated edit path; the public resolver never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable profile identity.
    pub id: ProfileId,
    /// The owning account (subscription lookup key).
    pub account_id: AccountId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Raw date of birth as registered (expected `YYYY-MM-DD`).
    #[serde(default)]
    pub date_of_birth: Option<String>,

    /// Known allergies.
    #[serde(default)]
    pub allergies: Option<String>,
    /// Chronic or acute conditions.
    #[serde(default)]
    pub conditions: Option<String>,
    /// Current medications.
    #[serde(default)]
    pub medications: Option<String>,
    /// Blood type.
    #[serde(default)]
    pub blood_type: Option<String>,
    /// Gender.
    #[serde(default)]
    pub gender: Option<String>,
    /// Physical description to help identification.
    #[serde(default)]
    pub physical_description: Option<String>,
    /// Free-form notes for first responders.
    #[serde(default)]
    pub special_notes: Option<String>,
    /// Medical-aid / insurance provider.
    #[serde(default)]
    pub medical_aid_provider: Option<String>,
    /// Medical-aid policy number.
    #[serde(default)]
    pub medical_aid_policy_number: Option<String>,
    /// Primary spoken language.
    #[serde(default)]
    pub primary_language: Option<String>,
    /// Religion, where relevant to care decisions.
    #[serde(default)]
    pub religion: Option<String>,
    /// Anything else the owner chose to record.
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl Profile {
    /// Creates a minimal profile with a fresh identity.
    ///
    /// All tiered medical fields start empty; use struct update syntax or
    /// the builder-style helpers to fill them in.
    #[must_use]
    pub fn new(
        account_id: AccountId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: ProfileId::new(),
            account_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: None,
            allergies: None,
            conditions: None,
            medications: None,
            blood_type: None,
            gender: None,
            physical_description: None,
            special_notes: None,
            medical_aid_provider: None,
            medical_aid_policy_number: None,
            primary_language: None,
            religion: None,
            additional_notes: None,
        }
    }

    /// Sets the raw date of birth.
    #[must_use]
    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = Some(dob.into());
        self
    }

    /// Sets the blood type.
    #[must_use]
    pub fn with_blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.blood_type = Some(blood_type.into());
        self
    }

    /// Sets the allergies field.
    #[must_use]
    pub fn with_allergies(mut self, allergies: impl Into<String>) -> Self {
        self.allergies = Some(allergies.into());
        self
    }
}
