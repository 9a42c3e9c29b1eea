//! HTTP handlers for the billing endpoints.
//!
//! These handlers connect Axum routes to the application layer
//! command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use secrecy::{ExposeSecret, SecretString};

use crate::application::handlers::billing::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CreateSubscriptionCommand,
    CreateSubscriptionHandler, GetBillingKeyHandler, ListPaymentsHandler, ListPaymentsQuery,
    VerifyPaymentCommand, VerifyPaymentHandler,
};
use crate::config::BillingConfig;
use crate::domain::billing::{BillingError, SignatureVerifier};
use crate::domain::foundation::UserId;
use crate::ports::{BillingProvider, PaymentRecordRepository, UserRepository};

use super::dto::{
    BillingKeyResponse, ErrorResponse, PaymentRecordView, PaymentsResponse, StatusResponse,
    SubscribeResponse, VerifyPaymentRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all billing dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct BillingAppState {
    pub users: Arc<dyn UserRepository>,
    pub payments: Arc<dyn PaymentRecordRepository>,
    pub billing: Arc<dyn BillingProvider>,
    pub key_id: String,
    pub plan_id: String,
    key_secret: SecretString,
}

impl BillingAppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        payments: Arc<dyn PaymentRecordRepository>,
        billing: Arc<dyn BillingProvider>,
        config: &BillingConfig,
    ) -> Self {
        Self {
            users,
            payments,
            billing,
            key_id: config.key_id.clone(),
            plan_id: config.plan_id.clone(),
            key_secret: config.key_secret.clone(),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn billing_key_handler(&self) -> GetBillingKeyHandler {
        GetBillingKeyHandler::new(self.key_id.clone())
    }

    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(
            self.users.clone(),
            self.billing.clone(),
            self.plan_id.clone(),
        )
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(
            self.users.clone(),
            self.payments.clone(),
            Arc::new(SignatureVerifier::new(self.key_secret.expose_secret().clone())),
        )
    }

    pub fn cancel_subscription_handler(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.users.clone(), self.billing.clone())
    }

    pub fn list_payments_handler(&self) -> ListPaymentsHandler {
        ListPaymentsHandler::new(self.users.clone(), self.payments.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Authenticated user context extracted from the request.
///
/// Token validation happens upstream; by the time a request reaches this
/// service the verified account id travels in the `X-User-Id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/billing/key - Publishable key for the checkout widget
pub async fn get_billing_key(State(state): State<BillingAppState>) -> impl IntoResponse {
    let key = state.billing_key_handler().handle();

    Json(BillingKeyResponse {
        success: true,
        message: "Billing API key".to_string(),
        key: key.key,
    })
}

/// POST /api/billing/subscribe - Create a subscription for the current user
pub async fn create_subscription(
    State(state): State<BillingAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.create_subscription_handler();
    let result = handler
        .handle(CreateSubscriptionCommand {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(SubscribeResponse {
        success: true,
        message: "Subscription created".to_string(),
        subscription_id: result.subscription_id,
    }))
}

/// POST /api/billing/verify - Verify a payment notification
pub async fn verify_payment(
    State(state): State<BillingAppState>,
    user: AuthenticatedUser,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.verify_payment_handler();
    handler
        .handle(VerifyPaymentCommand {
            user_id: user.user_id,
            payment_id: request.razorpay_payment_id,
            signature: request.razorpay_signature,
            subscription_id: request.razorpay_subscription_id,
        })
        .await?;

    Ok(Json(StatusResponse::ok("Payment verified")))
}

/// POST /api/billing/unsubscribe - Cancel the current user's subscription
pub async fn cancel_subscription(
    State(state): State<BillingAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.cancel_subscription_handler();
    handler
        .handle(CancelSubscriptionCommand {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(StatusResponse::ok("Subscription cancelled")))
}

/// GET /api/billing/payments - List all payment records (admin only)
pub async fn list_payments(
    State(state): State<BillingAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.list_payments_handler();
    let records = handler
        .handle(ListPaymentsQuery {
            requested_by: user.user_id,
        })
        .await?;

    let payments: Vec<PaymentRecordView> =
        records.into_iter().map(PaymentRecordView::from).collect();

    Ok(Json(PaymentsResponse {
        success: true,
        count: payments.len(),
        payments,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts billing errors to HTTP responses.
pub struct BillingApiError(BillingError);

impl From<BillingError> for BillingApiError {
    fn from(err: BillingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BillingApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            BillingError::UserNotFound(_) => StatusCode::NOT_FOUND,
            BillingError::AdminForbidden { .. }
            | BillingError::AlreadyActive(_)
            | BillingError::NoSubscription(_)
            | BillingError::SignatureMismatch
            | BillingError::AdminOnly { .. } => StatusCode::BAD_REQUEST,
            BillingError::Provider { .. } | BillingError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse::new(self.0.message());
        (status, Json(body)).into_response()
    }
}
