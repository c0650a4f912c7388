//! Entitlement resolution: account -> paid tier boolean.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::DisclosureResult;
use crate::profile::AccountId;
use crate::storage::SubscriptionStore;

/// Evaluates paid entitlement from the subscription store.
#[derive(Clone)]
pub struct EntitlementResolver {
    subscriptions: Arc<dyn SubscriptionStore>,
}

impl EntitlementResolver {
    /// Create a resolver over the given subscription store.
    #[must_use]
    pub fn new(subscriptions: Arc<dyn SubscriptionStore>) -> Self {
        Self { subscriptions }
    }

    /// Compute entitlement for an account at the given instant.
    ///
    /// Runs on every disclosure request and is never cached, so a lapsed
    /// subscription downgrades the very next view. A missing subscription
    /// row is simply `false` - most accounts have none.
    ///
    /// # Errors
    /// `Upstream` when the store fails.
    pub fn is_entitled(
        &self,
        account_id: AccountId,
        now: DateTime<Utc>,
    ) -> DisclosureResult<bool> {
        let subscription = self.subscriptions.find_by_account(account_id)?;
        Ok(subscription.is_some_and(|sub| sub.is_entitled_at(now)))
    }
}
