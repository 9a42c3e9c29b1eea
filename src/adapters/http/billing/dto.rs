//! Request and response DTOs for the billing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::{PaymentRecordId, Timestamp, UserId};

/// Payment notification fields as submitted by the checkout widget.
///
/// Field names follow the provider's wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    pub razorpay_subscription_id: String,
}

/// Response carrying the publishable gateway key.
#[derive(Debug, Clone, Serialize)]
pub struct BillingKeyResponse {
    pub success: bool,
    pub message: String,
    pub key: String,
}

/// Response for a created subscription.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
    pub subscription_id: String,
}

/// Generic success response for verify and cancel.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// One payment record in the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecordView {
    pub id: PaymentRecordId,
    pub user_id: UserId,
    pub payment_id: String,
    pub subscription_id: String,
    pub recorded_at: Timestamp,
}

impl From<PaymentRecord> for PaymentRecordView {
    fn from(record: PaymentRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            payment_id: record.provider_payment_id,
            subscription_id: record.provider_subscription_id,
            recorded_at: record.recorded_at,
        }
    }
}

/// Admin listing of all payment records.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentsResponse {
    pub success: bool,
    pub count: usize,
    pub payments: Vec<PaymentRecordView>,
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
