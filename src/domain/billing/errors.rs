//! Billing-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UserNotFound | 404 |
//! | AdminForbidden | 400 |
//! | AlreadyActive | 400 |
//! | NoSubscription | 400 |
//! | SignatureMismatch | 400 |
//! | AdminOnly | 400 |
//! | Provider | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors raised by the subscription billing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// Referenced user does not exist.
    UserNotFound(UserId),

    /// Admin accounts cannot hold subscriptions.
    AdminForbidden { action: String },

    /// User already has an active subscription.
    AlreadyActive(UserId),

    /// User has no stored subscription id to operate on.
    NoSubscription(UserId),

    /// Payment signature did not verify.
    SignatureMismatch,

    /// Operation is restricted to admin accounts.
    AdminOnly { action: String },

    /// Billing provider call failed.
    Provider { reason: String },

    /// Repository or other infrastructure failure.
    Infrastructure(String),
}

impl BillingError {
    pub fn user_not_found(user_id: UserId) -> Self {
        BillingError::UserNotFound(user_id)
    }

    pub fn admin_forbidden(action: impl Into<String>) -> Self {
        BillingError::AdminForbidden {
            action: action.into(),
        }
    }

    pub fn already_active(user_id: UserId) -> Self {
        BillingError::AlreadyActive(user_id)
    }

    pub fn no_subscription(user_id: UserId) -> Self {
        BillingError::NoSubscription(user_id)
    }

    pub fn signature_mismatch() -> Self {
        BillingError::SignatureMismatch
    }

    pub fn admin_only(action: impl Into<String>) -> Self {
        BillingError::AdminOnly {
            action: action.into(),
        }
    }

    pub fn provider(reason: impl Into<String>) -> Self {
        BillingError::Provider {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BillingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::UserNotFound(_) => ErrorCode::UserNotFound,
            BillingError::AdminForbidden { .. } | BillingError::AdminOnly { .. } => {
                ErrorCode::Forbidden
            }
            BillingError::AlreadyActive(_) => ErrorCode::SubscriptionActive,
            BillingError::NoSubscription(_) => ErrorCode::SubscriptionMissing,
            BillingError::SignatureMismatch => ErrorCode::SignatureMismatch,
            BillingError::Provider { .. } => ErrorCode::ProviderError,
            BillingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            BillingError::UserNotFound(_) => "User does not exist".to_string(),
            BillingError::AdminForbidden { action } => {
                format!("ADMIN cannot {} a subscription", action)
            }
            BillingError::AlreadyActive(_) => {
                "User already has an active subscription".to_string()
            }
            BillingError::NoSubscription(_) => {
                "User has no subscription to cancel".to_string()
            }
            BillingError::SignatureMismatch => {
                "Payment verification failed, signature mismatch".to_string()
            }
            BillingError::AdminOnly { action } => {
                format!("Only ADMIN can {}", action)
            }
            BillingError::Provider { reason } => reason.clone(),
            BillingError::Infrastructure(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BillingError {}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        BillingError::Infrastructure(err.message)
    }
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
