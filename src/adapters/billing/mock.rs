//! Mock billing gateway for tests and local development.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{BillingProvider, CreatePlanSubscription, ProviderError, ProviderSubscription};

/// In-memory gateway with scripted failures and recorded calls.
///
/// By default every create returns a fresh `sub_{n}` id with status
/// `created`, and every cancel succeeds with status `cancelled`.
pub struct MockBillingGateway {
    counter: AtomicU64,
    created: Mutex<Vec<CreatePlanSubscription>>,
    cancelled: Mutex<Vec<String>>,
    fail_create_with: Mutex<Option<String>>,
    fail_cancel_with: Mutex<Option<String>>,
}

impl MockBillingGateway {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
            created: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
            fail_create_with: Mutex::new(None),
            fail_cancel_with: Mutex::new(None),
        }
    }

    /// Make the next create call fail with the given message.
    pub fn fail_next_create(&self, message: impl Into<String>) {
        *self.fail_create_with.lock().unwrap() = Some(message.into());
    }

    /// Make the next cancel call fail with the given message.
    pub fn fail_next_cancel(&self, message: impl Into<String>) {
        *self.fail_cancel_with.lock().unwrap() = Some(message.into());
    }

    /// Requests passed to `create_subscription`, in call order.
    pub fn created_requests(&self) -> Vec<CreatePlanSubscription> {
        self.created.lock().unwrap().clone()
    }

    /// Subscription ids passed to `cancel_subscription`, in call order.
    pub fn cancelled_ids(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }
}

impl Default for MockBillingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillingProvider for MockBillingGateway {
    async fn create_subscription(
        &self,
        request: CreatePlanSubscription,
    ) -> Result<ProviderSubscription, ProviderError> {
        if let Some(message) = self.fail_create_with.lock().unwrap().take() {
            return Err(ProviderError::new(message));
        }

        self.created.lock().unwrap().push(request);
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ProviderSubscription {
            id: format!("sub_{}", n),
            status: "created".to_string(),
        })
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<ProviderSubscription, ProviderError> {
        if let Some(message) = self.fail_cancel_with.lock().unwrap().take() {
            return Err(ProviderError::new(message));
        }

        self.cancelled
            .lock()
            .unwrap()
            .push(subscription_id.to_string());
        Ok(ProviderSubscription {
            id: subscription_id.to_string(),
            status: "cancelled".to_string(),
        })
    }
}
