//! Subscription status state machine.
//!
//! Tracks a user's subscription through the payment lifecycle as reported
//! by the billing provider and confirmed by payment verification.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Subscription status.
///
/// Lifecycle: `None -> Pending (provider created) -> Active (verified
/// payment) -> Inactive (cancelled)`. There is no path out of `Inactive`;
/// re-subscription is not part of this flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// User has never started a subscription.
    None,

    /// Provider has created the subscription, first payment not yet verified.
    Pending,

    /// Payment verified; subscription grants access.
    Active,

    /// Subscription was cancelled.
    Inactive,
}

impl SubscriptionStatus {
    /// Returns true if this status grants access to paid content.
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }

    /// Maps a provider-reported status string into the local lifecycle.
    ///
    /// Unknown provider statuses map to `Pending`: a subscription the
    /// provider knows about but whose payment has not been verified here
    /// must not grant access.
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "created" | "authenticated" | "pending" | "halted" => SubscriptionStatus::Pending,
            "active" => SubscriptionStatus::Active,
            "cancelled" | "completed" | "expired" => SubscriptionStatus::Inactive,
            _ => SubscriptionStatus::Pending,
        }
    }

    /// Stable string form used by the persistence layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::None => "none",
            SubscriptionStatus::Pending => "pending",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Inactive => "inactive",
        }
    }

    /// Parses the persistence-layer string form.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(SubscriptionStatus::None),
            "pending" => Some(SubscriptionStatus::Pending),
            "active" => Some(SubscriptionStatus::Active),
            "inactive" => Some(SubscriptionStatus::Inactive),
            _ => Option::None,
        }
    }
}

impl StateMachine for SubscriptionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, target),
            (None, Pending) | (Pending, Active) | (Active, Inactive) | (Pending, Inactive)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubscriptionStatus::*;
        match self {
            None => vec![Pending],
            Pending => vec![Active, Inactive],
            Active => vec![Inactive],
            Inactive => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_can_only_move_to_pending() {
        let status = SubscriptionStatus::None;
        assert!(status.can_transition_to(&SubscriptionStatus::Pending));
        assert!(!status.can_transition_to(&SubscriptionStatus::Active));
        assert!(!status.can_transition_to(&SubscriptionStatus::Inactive));
    }

    #[test]
    fn pending_activates_on_verified_payment() {
        let result = SubscriptionStatus::Pending.transition_to(SubscriptionStatus::Active);
        assert_eq!(result, Ok(SubscriptionStatus::Active));
    }

    #[test]
    fn active_can_be_cancelled() {
        let result = SubscriptionStatus::Active.transition_to(SubscriptionStatus::Inactive);
        assert_eq!(result, Ok(SubscriptionStatus::Inactive));
    }

    #[test]
    fn inactive_is_terminal() {
        assert!(SubscriptionStatus::Inactive.is_terminal());
        assert!(SubscriptionStatus::Inactive
            .transition_to(SubscriptionStatus::Active)
            .is_err());
    }

    #[test]
    fn only_active_grants_access() {
        assert!(SubscriptionStatus::Active.is_active());
        assert!(!SubscriptionStatus::None.is_active());
        assert!(!SubscriptionStatus::Pending.is_active());
        assert!(!SubscriptionStatus::Inactive.is_active());
    }

    #[test]
    fn provider_statuses_map_into_local_lifecycle() {
        assert_eq!(
            SubscriptionStatus::from_provider("created"),
            SubscriptionStatus::Pending
        );
        assert_eq!(
            SubscriptionStatus::from_provider("active"),
            SubscriptionStatus::Active
        );
        assert_eq!(
            SubscriptionStatus::from_provider("cancelled"),
            SubscriptionStatus::Inactive
        );
    }

    #[test]
    fn unknown_provider_status_stays_pending() {
        assert_eq!(
            SubscriptionStatus::from_provider("paused"),
            SubscriptionStatus::Pending
        );
    }

    #[test]
    fn persistence_form_round_trips() {
        for status in [
            SubscriptionStatus::None,
            SubscriptionStatus::Pending,
            SubscriptionStatus::Active,
            SubscriptionStatus::Inactive,
        ] {
            assert_eq!(SubscriptionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            SubscriptionStatus::None,
            SubscriptionStatus::Pending,
            SubscriptionStatus::Active,
            SubscriptionStatus::Inactive,
        ] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    target
                );
            }
        }
    }
}
