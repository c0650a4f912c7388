//! Subscription records and entitlement evaluation.
//!
//! Entitlement is computed, never stored: a pure function of the
//! subscription's status and period end against the evaluation instant.
//! There is no grace period and no caching, so a lapsed subscription
//! takes effect on the very next public view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::AccountId;

/// Status value that grants paid entitlement.
///
/// The status column is free text written by the billing collaborator;
/// comparison is exact, so `"Active"` or `"trialing"` do not entitle.
const ACTIVE_STATUS: &str = "active";

/// A billing subscription, owned by an account (not a profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// The owning account.
    pub account_id: AccountId,
    /// Free-text billing status; only exactly `"active"` entitles.
    pub status: String,
    /// End of the currently paid period, if any.
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Creates a subscription record.
    #[must_use]
    pub fn new(
        account_id: AccountId,
        status: impl Into<String>,
        current_period_end: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            account_id,
            status: status.into(),
            current_period_end,
        }
    }

    /// Evaluates paid entitlement at the given instant.
    ///
    /// True iff the status is exactly `"active"`, a period end exists,
    /// and it is strictly after `now`. A period ending at exactly `now`
    /// does not entitle.
    #[must_use]
    pub fn is_entitled_at(&self, now: DateTime<Utc>) -> bool {
        self.status == ACTIVE_STATUS
            && self.current_period_end.is_some_and(|end| end > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn active_until(end: DateTime<Utc>) -> Subscription {
        Subscription::new(AccountId::new(), "active", Some(end))
    }

    #[test]
    fn test_entitled_when_period_in_future() {
        let now = Utc::now();
        let sub = active_until(now + Duration::seconds(1));
        assert!(sub.is_entitled_at(now));
    }

    #[test]
    fn test_not_entitled_when_period_in_past() {
        let now = Utc::now();
        let sub = active_until(now - Duration::seconds(1));
        assert!(!sub.is_entitled_at(now));
    }

    #[test]
    fn test_not_entitled_at_exact_boundary() {
        let now = Utc::now();
        let sub = active_until(now);
        assert!(!sub.is_entitled_at(now));
    }

    #[test]
    fn test_not_entitled_without_period_end() {
        let sub = Subscription::new(AccountId::new(), "active", None);
        assert!(!sub.is_entitled_at(Utc::now()));
    }

    #[test]
    fn test_status_comparison_is_exact() {
        let now = Utc::now();
        let end = Some(now + Duration::days(30));

        for status in ["Active", "ACTIVE", "trialing", "canceled", ""] {
            let sub = Subscription::new(AccountId::new(), status, end);
            assert!(!sub.is_entitled_at(now), "status {status:?} must not entitle");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let sub = active_until(Utc::now() + Duration::days(7));
        let json = serde_json::to_string(&sub).unwrap();
        let back: Subscription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sub);
    }

    #[test]
    fn test_deserialize_missing_period_end() {
        let json = format!(
            r#"{{"account_id":"{}","status":"canceled"}}"#,
            uuid::Uuid::new_v4()
        );
        let sub: Subscription = serde_json::from_str(&json).unwrap();
        assert!(sub.current_period_end.is_none());
        assert!(!sub.is_entitled_at(Utc::now()));
    }
}
