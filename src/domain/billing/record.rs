//! Append-only payment records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentRecordId, Timestamp, UserId};

/// Record of a verified subscription payment.
///
/// # Invariants
///
/// - Created only after signature verification succeeds
/// - Append-only: never updated or deleted by this code path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier for this record.
    pub id: PaymentRecordId,

    /// User the payment belongs to.
    pub user_id: UserId,

    /// Payment identifier issued by the billing provider.
    pub provider_payment_id: String,

    /// Signature that proved the payment notification's authenticity.
    pub provider_signature: String,

    /// Subscription the payment was made against.
    pub provider_subscription_id: String,

    /// When the record was written.
    pub recorded_at: Timestamp,
}

impl PaymentRecord {
    /// Creates a payment record for a verified payment.
    pub fn new(
        user_id: UserId,
        provider_payment_id: impl Into<String>,
        provider_signature: impl Into<String>,
        provider_subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentRecordId::new(),
            user_id,
            provider_payment_id: provider_payment_id.into(),
            provider_signature: provider_signature.into(),
            provider_subscription_id: provider_subscription_id.into(),
            recorded_at: Timestamp::now(),
        }
    }
}
