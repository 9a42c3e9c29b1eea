//! User aggregate entity.
//!
//! The User carries the subscription sub-document the billing operations
//! read and mutate. Admin accounts manage the platform and never hold a
//! subscription of their own.

use serde::{Deserialize, Serialize};

use crate::domain::billing::SubscriptionStatus;
use crate::domain::foundation::UserId;

/// Role of a platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Stable string form used by the persistence layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Parses the persistence-layer string form.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Subscription sub-document embedded in the user record.
///
/// # Invariants
///
/// - At most one provider subscription id at a time
/// - Status follows the `SubscriptionStatus` lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    /// Provider-issued subscription identifier.
    pub id: Option<String>,

    /// Current position in the subscription lifecycle.
    pub status: SubscriptionStatus,
}

impl UserSubscription {
    /// Subscription state for a user who has never subscribed.
    pub fn none() -> Self {
        Self {
            id: None,
            status: SubscriptionStatus::None,
        }
    }

    /// Records a provider-created subscription.
    ///
    /// Replaces any previous id; the status is whatever the provider
    /// reported, mapped into the local lifecycle.
    pub fn attach(&mut self, id: impl Into<String>, status: SubscriptionStatus) {
        self.id = Some(id.into());
        self.status = status;
    }

    /// Marks the subscription active after a verified payment.
    pub fn activate(&mut self) {
        self.status = SubscriptionStatus::Active;
    }

    /// Marks the subscription inactive after cancellation.
    pub fn deactivate(&mut self) {
        self.status = SubscriptionStatus::Inactive;
    }

    /// Returns true if the subscription currently grants access.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl Default for UserSubscription {
    fn default() -> Self {
        Self::none()
    }
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity-layer account id.
    pub id: UserId,

    /// Contact email.
    pub email: String,

    /// Account role.
    pub role: UserRole,

    /// Embedded subscription state.
    #[serde(default)]
    pub subscription: UserSubscription,
}

impl User {
    /// Creates a regular account with no subscription.
    pub fn new(id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            email: email.into(),
            role,
            subscription: UserSubscription::none(),
        }
    }

    /// Returns true if this account is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
