//! The disclosure assembler: the single point of truth for what each
//! tier discloses.
//!
//! Everything above this module fetches eagerly; this is where tier
//! filtering happens. The assembler is a pure function of the profile,
//! the contact list, the entitlement flag, and the evaluation date - no
//! stores, no side effects.

use chrono::NaiveDate;

use crate::contact::EmergencyContact;
use crate::payload::{
    BasicDisclosure, ContactCard, DisclosurePayload, FullDisclosure, MedicalBlock,
};
use crate::profile::Profile;

/// Priority value of the contact disclosed in every tier.
const PRIMARY_PRIORITY: u32 = 1;

/// Priority value of the contact disclosed only under the paid tier.
const SECONDARY_PRIORITY: u32 = 2;

/// Shape the tiered payload, evaluated against today's date.
#[must_use]
pub fn assemble(
    profile: &Profile,
    contacts: &[EmergencyContact],
    is_paid: bool,
) -> DisclosurePayload {
    assemble_at(profile, contacts, is_paid, chrono::Utc::now().date_naive())
}

/// Shape the tiered payload against an explicit evaluation date.
#[must_use]
pub fn assemble_at(
    profile: &Profile,
    contacts: &[EmergencyContact],
    is_paid: bool,
    today: NaiveDate,
) -> DisclosurePayload {
    let age = profile
        .date_of_birth
        .as_deref()
        .and_then(|raw| age_from_raw(raw, today));
    let primary = find_by_priority(contacts, PRIMARY_PRIORITY).map(ContactCard::from);

    if is_paid {
        let secondary = find_by_priority(contacts, SECONDARY_PRIORITY).map(ContactCard::from);
        DisclosurePayload::Full(FullDisclosure {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            age,
            emergency_contact: primary,
            is_paid: true,
            medical: MedicalBlock {
                allergies: profile.allergies.clone(),
                conditions: profile.conditions.clone(),
                medications: profile.medications.clone(),
                blood_type: profile.blood_type.clone(),
                gender: profile.gender.clone(),
                physical_description: profile.physical_description.clone(),
                special_notes: profile.special_notes.clone(),
                medical_aid_provider: profile.medical_aid_provider.clone(),
                medical_aid_policy_number: profile.medical_aid_policy_number.clone(),
                primary_language: profile.primary_language.clone(),
                religion: profile.religion.clone(),
                additional_notes: profile.additional_notes.clone(),
                emergency_contact_2: secondary,
            },
        })
    } else {
        DisclosurePayload::Basic(BasicDisclosure {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            age,
            emergency_contact: primary,
            is_paid: false,
        })
    }
}

/// Select a contact by priority value.
///
/// The list may have gaps or duplicates; the first match in the given
/// order wins, which on a store-ordered list means the ascending-first
/// row.
fn find_by_priority(contacts: &[EmergencyContact], priority: u32) -> Option<&EmergencyContact> {
    contacts.iter().find(|contact| contact.priority == priority)
}

/// Whole calendar years between a raw birth-date string and `today`.
///
/// A missing, unparseable, or future birth date yields `None`; a bad
/// value must never block disclosure of the rest of the payload.
fn age_from_raw(raw: &str, today: NaiveDate) -> Option<u32> {
    let birth = parse_birth_date(raw)?;
    today.years_since(birth)
}

/// Parse the registered birth-date string.
///
/// `YYYY-MM-DD` is the registered format; a full RFC 3339 timestamp is
/// tolerated because some upstream writers store one.
fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
