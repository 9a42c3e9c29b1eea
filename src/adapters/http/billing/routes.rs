//! Axum router configuration for the billing endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_subscription, create_subscription, get_billing_key, list_payments, verify_payment,
    BillingAppState,
};

/// Create the billing API router.
///
/// # Routes
///
/// ## User Endpoints (require authentication)
/// - `GET /key` - Publishable key for the checkout widget
/// - `POST /subscribe` - Create a subscription
/// - `POST /verify` - Verify a payment notification
/// - `POST /unsubscribe` - Cancel the subscription
///
/// ## Admin Endpoints
/// - `GET /payments` - List all payment records
pub fn billing_routes() -> Router<BillingAppState> {
    Router::new()
        .route("/key", get(get_billing_key))
        .route("/subscribe", post(create_subscription))
        .route("/verify", post(verify_payment))
        .route("/unsubscribe", post(cancel_subscription))
        .route("/payments", get(list_payments))
}

/// Create the complete billing module router, suitable for mounting at
/// `/api`.
pub fn billing_router() -> Router<BillingAppState> {
    Router::new().nest("/billing", billing_routes())
}
