//! CreateSubscriptionHandler - Command handler for starting a subscription.

use std::sync::Arc;

use crate::domain::billing::{BillingError, SubscriptionStatus};
use crate::domain::foundation::UserId;
use crate::ports::{BillingProvider, CreatePlanSubscription, UserRepository};

/// Monthly cadence, one year of charges.
const TOTAL_CHARGE_COUNT: u32 = 12;

/// Command to create a subscription for a user.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful subscription creation.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionResult {
    pub subscription_id: String,
    pub status: SubscriptionStatus,
}

/// Handler for creating a provider subscription and attaching it to the user.
///
/// The provider subscription is created first; the user document is only
/// persisted after the provider call succeeds. There is no compensating
/// cancel if the persist fails afterwards.
pub struct CreateSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    billing: Arc<dyn BillingProvider>,
    plan_id: String,
}

impl CreateSubscriptionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        billing: Arc<dyn BillingProvider>,
        plan_id: impl Into<String>,
    ) -> Self {
        Self {
            users,
            billing,
            plan_id: plan_id.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, BillingError> {
        // 1. Load the user
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| BillingError::user_not_found(cmd.user_id.clone()))?;

        // 2. Admins never hold subscriptions
        if user.is_admin() {
            return Err(BillingError::admin_forbidden("buy"));
        }

        // 3. Reject a second subscription while one is active
        if user.subscription.is_active() {
            return Err(BillingError::already_active(cmd.user_id));
        }

        // 4. Create the recurring subscription at the provider
        let subscription = self
            .billing
            .create_subscription(CreatePlanSubscription {
                plan_id: self.plan_id.clone(),
                total_count: TOTAL_CHARGE_COUNT,
                customer_notify: true,
            })
            .await
            .map_err(|e| BillingError::provider(e.message))?;

        // 5. Attach the provider id and its reported status to the user
        let status = SubscriptionStatus::from_provider(&subscription.status);
        user.subscription.attach(subscription.id.clone(), status);

        // 6. Persist
        self.users.save(&user).await?;

        Ok(CreateSubscriptionResult {
            subscription_id: subscription.id,
            status,
        })
    }
}
