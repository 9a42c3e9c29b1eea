//! Command and query handlers for subscription billing.

mod cancel_subscription;
mod create_subscription;
mod get_billing_key;
mod list_payments;
mod verify_payment;

pub use cancel_subscription::{CancelSubscriptionCommand, CancelSubscriptionHandler};
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use get_billing_key::{BillingKey, GetBillingKeyHandler};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentHandler};
