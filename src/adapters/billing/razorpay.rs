//! Razorpay billing gateway adapter.
//!
//! Implements the `BillingProvider` port against the Razorpay
//! subscriptions API. Authentication is HTTP basic auth with the key id
//! and key secret.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::ports::{BillingProvider, CreatePlanSubscription, ProviderError, ProviderSubscription};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Publishable key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Key secret paired with the key id.
    key_secret: SecretString,

    /// Base URL for the Razorpay API.
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Razorpay gateway adapter.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    async fn parse_subscription(
        &self,
        response: reqwest::Response,
    ) -> Result<ProviderSubscription, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GatewayErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.description)
                .unwrap_or_else(|| format!("gateway returned status {}", status.as_u16()));
            return Err(ProviderError::with_status(message, status.as_u16()));
        }

        let body: SubscriptionBody = response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("invalid gateway response: {}", e)))?;

        Ok(ProviderSubscription {
            id: body.id,
            status: body.status,
        })
    }
}

#[async_trait]
impl BillingProvider for RazorpayGateway {
    async fn create_subscription(
        &self,
        request: CreatePlanSubscription,
    ) -> Result<ProviderSubscription, ProviderError> {
        let url = format!("{}/v1/subscriptions", self.config.api_base_url);

        // Razorpay expects customer_notify as 0/1.
        let body = json!({
            "plan_id": request.plan_id,
            "total_count": request.total_count,
            "customer_notify": if request.customer_notify { 1 } else { 0 },
        });

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let subscription = self.parse_subscription(response).await?;
        tracing::debug!(
            subscription_id = %subscription.id,
            status = %subscription.status,
            "created gateway subscription"
        );
        Ok(subscription)
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<ProviderSubscription, ProviderError> {
        let url = format!(
            "{}/v1/subscriptions/{}/cancel",
            self.config.api_base_url, subscription_id
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let subscription = self.parse_subscription(response).await?;
        tracing::debug!(
            subscription_id = %subscription.id,
            "cancelled gateway subscription"
        );
        Ok(subscription)
    }
}

/// Subscription fields we read from gateway responses.
#[derive(Debug, Deserialize)]
struct SubscriptionBody {
    id: String,
    status: String,
}

/// Error body shape returned by the gateway.
#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    error: Option<GatewayErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorDetail {
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_production_base_url() {
        let config = RazorpayConfig::new("rzp_test_abc", "secret");
        assert_eq!(config.api_base_url, "https://api.razorpay.com");
    }

    #[test]
    fn base_url_is_overridable_for_tests() {
        let config =
            RazorpayConfig::new("rzp_test_abc", "secret").with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn subscription_body_parses_gateway_json() {
        let body: SubscriptionBody = serde_json::from_str(
            r#"{"id":"sub_00000000000001","entity":"subscription","status":"created"}"#,
        )
        .unwrap();
        assert_eq!(body.id, "sub_00000000000001");
        assert_eq!(body.status, "created");
    }

    #[test]
    fn error_body_parses_description() {
        let body: GatewayErrorBody = serde_json::from_str(
            r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"plan_id does not exist"}}"#,
        )
        .unwrap();
        assert_eq!(
            body.error.unwrap().description.as_deref(),
            Some("plan_id does not exist")
        );
    }
}
