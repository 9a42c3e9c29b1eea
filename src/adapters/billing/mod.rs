//! Billing gateway adapters.

mod mock;
mod razorpay;

pub use mock::MockBillingGateway;
pub use razorpay::{RazorpayConfig, RazorpayGateway};
