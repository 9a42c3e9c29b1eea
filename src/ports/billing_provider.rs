//! Billing provider port for the external subscription gateway.
//!
//! Defines the contract the billing handlers need from the payment
//! gateway: create a recurring plan subscription and cancel one by id.
//! Implementations handle the actual provider API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for the external recurring-billing provider.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Create a recurring subscription against a billing plan.
    ///
    /// Returns the provider's subscription id and its reported status.
    async fn create_subscription(
        &self,
        request: CreatePlanSubscription,
    ) -> Result<ProviderSubscription, ProviderError>;

    /// Cancel a subscription by its provider id.
    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<ProviderSubscription, ProviderError>;
}

/// Request to create a plan subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanSubscription {
    /// Provider plan to subscribe against.
    pub plan_id: String,

    /// Total number of billing cycles to charge.
    pub total_count: u32,

    /// Whether the provider should notify the customer directly.
    pub customer_notify: bool,
}

/// Subscription as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSubscription {
    /// Provider's subscription id.
    pub id: String,

    /// Raw provider-reported status (e.g. `created`, `active`).
    pub status: String,
}

/// Error from a billing provider operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderError {
    /// Human-readable message from the provider or transport.
    pub message: String,

    /// HTTP status returned by the provider, when available.
    pub status: Option<u16>,
}

impl ProviderError {
    /// Creates a provider error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Creates a provider error carrying the provider's HTTP status.
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProviderError {}
