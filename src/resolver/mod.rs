//! The anonymous disclosure resolver.
//!
//! Four collaborators, composed sequentially and short-circuiting:
//! token -> profile, profile -> contacts, account -> entitlement, and the
//! assembler that shapes the tiered payload. The service owns the three
//! lookup resolvers and is built by dependency injection from store
//! handles, so each piece is independently testable with substitutable
//! backends.

pub mod assembler;
mod contacts;
mod entitlement;
mod token;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::DisclosureResult;
use crate::payload::DisclosurePayload;
use crate::storage::{ContactStore, ProfileStore, SubscriptionStore};

pub use contacts::ContactResolver;
pub use entitlement::EntitlementResolver;
pub use token::TokenResolver;

/// The disclosure pipeline.
///
/// Stateless between requests: every call re-reads the stores, so a
/// revoked token or lapsed subscription takes effect on the very next
/// view.
#[derive(Clone)]
pub struct DisclosureService {
    tokens: TokenResolver,
    contacts: ContactResolver,
    entitlements: EntitlementResolver,
}

impl DisclosureService {
    /// Create a service over the given stores.
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        contacts: Arc<dyn ContactStore>,
        subscriptions: Arc<dyn SubscriptionStore>,
    ) -> Self {
        Self {
            tokens: TokenResolver::new(profiles),
            contacts: ContactResolver::new(contacts),
            entitlements: EntitlementResolver::new(subscriptions),
        }
    }

    /// Resolve a public token into its tier-shaped payload, evaluated now.
    ///
    /// # Errors
    /// `MissingToken` for an empty token, `ProfileNotFound` when it does
    /// not resolve, `Upstream` when a store fails.
    pub fn disclose(&self, token: &str) -> DisclosureResult<DisclosurePayload> {
        self.disclose_at(token, Utc::now())
    }

    /// Resolve a public token with an explicit evaluation instant.
    ///
    /// Entitlement and age are both derived from `now`, which makes the
    /// subscription boundary testable to the second.
    ///
    /// # Errors
    /// Same as [`Self::disclose`].
    pub fn disclose_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DisclosureResult<DisclosurePayload> {
        let profile = self.tokens.resolve(token)?;
        let contacts = self.contacts.list(profile.id)?;
        let is_paid = self.entitlements.is_entitled(profile.account_id, now)?;

        tracing::debug!(profile = %profile.id, is_paid, "disclosure resolved");

        Ok(assembler::assemble_at(
            &profile,
            &contacts,
            is_paid,
            now.date_naive(),
        ))
    }
}
