//! CancelSubscriptionHandler - Command handler for cancelling a subscription.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::domain::foundation::UserId;
use crate::ports::{BillingProvider, UserRepository};

/// Command to cancel a user's subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
}

/// Handler cancelling the provider subscription and deactivating the user's.
///
/// The provider is cancelled first; if the persist afterwards fails, the
/// local status is left stale. There is no compensating transaction.
pub struct CancelSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    billing: Arc<dyn BillingProvider>,
}

impl CancelSubscriptionHandler {
    pub fn new(users: Arc<dyn UserRepository>, billing: Arc<dyn BillingProvider>) -> Self {
        Self { users, billing }
    }

    pub async fn handle(&self, cmd: CancelSubscriptionCommand) -> Result<(), BillingError> {
        // 1. Load the user
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| BillingError::user_not_found(cmd.user_id.clone()))?;

        // 2. Admins never hold subscriptions
        if user.is_admin() {
            return Err(BillingError::admin_forbidden("cancel"));
        }

        // 3. There must be a stored subscription id to cancel
        let subscription_id = user
            .subscription
            .id
            .clone()
            .ok_or_else(|| BillingError::no_subscription(cmd.user_id.clone()))?;

        // 4. Cancel at the provider
        self.billing
            .cancel_subscription(&subscription_id)
            .await
            .map_err(|e| BillingError::provider(e.message))?;

        // 5. Deactivate and persist
        user.subscription.deactivate();
        self.users.save(&user).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::SubscriptionStatus;
    use crate::domain::foundation::DomainError;
    use crate::domain::user::{User, UserRole};
    use crate::ports::{CreatePlanSubscription, ProviderError, ProviderSubscription};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        fn with_user(user: User) -> Self {
            Self {
                users: Mutex::new(vec![user]),
            }
        }

        fn empty() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
            }
        }

        fn stored(&self, id: &UserId) -> Option<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.id == id)
                .cloned()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.id == id)
                .cloned())
        }

        async fn save(&self, user: &User) -> Result<(), DomainError> {
            let mut users = self.users.lock().unwrap();
            if let Some(pos) = users.iter().position(|u| u.id == user.id) {
                users[pos] = user.clone();
            } else {
                users.push(user.clone());
            }
            Ok(())
        }
    }

    struct MockBillingProvider {
        cancelled: Mutex<Vec<String>>,
        fail_with: Option<String>,
    }

    impl MockBillingProvider {
        fn new() -> Self {
            Self {
                cancelled: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                cancelled: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }

        fn cancelled_ids(&self) -> Vec<String> {
            self.cancelled.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BillingProvider for MockBillingProvider {
        async fn create_subscription(
            &self,
            _request: CreatePlanSubscription,
        ) -> Result<ProviderSubscription, ProviderError> {
            panic!("create_subscription not expected");
        }

        async fn cancel_subscription(
            &self,
            subscription_id: &str,
        ) -> Result<ProviderSubscription, ProviderError> {
            if let Some(message) = &self.fail_with {
                return Err(ProviderError::new(message.clone()));
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

    fn active_subscriber() -> User {
        let mut user = User::new(
            UserId::new("user-1").unwrap(),
            "learner@example.com",
            UserRole::User,
        );
        user.subscription.attach("sub_1", SubscriptionStatus::Active);
        user
    }

    #[tokio::test]
    async fn cancels_at_provider_and_deactivates() {
        let users = Arc::new(MockUserRepository::with_user(active_subscriber()));
        let billing = Arc::new(MockBillingProvider::new());

        CancelSubscriptionHandler::new(users.clone(), billing.clone())
            .handle(CancelSubscriptionCommand {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(billing.cancelled_ids(), vec!["sub_1".to_string()]);

        let stored = users.stored(&UserId::new("user-1").unwrap()).unwrap();
        assert_eq!(stored.subscription.status, SubscriptionStatus::Inactive);
        // The provider id stays on the document for audit purposes.
        assert_eq!(stored.subscription.id.as_deref(), Some("sub_1"));
    }

    #[tokio::test]
    async fn missing_user_is_rejected() {
        let users = Arc::new(MockUserRepository::empty());
        let billing = Arc::new(MockBillingProvider::new());

        let result = CancelSubscriptionHandler::new(users, billing)
            .handle(CancelSubscriptionCommand {
                user_id: UserId::new("ghost").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(BillingError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn admin_cannot_cancel_subscription() {
        let mut admin = active_subscriber();
        admin.role = UserRole::Admin;
        let users = Arc::new(MockUserRepository::with_user(admin));
        let billing = Arc::new(MockBillingProvider::new());

        let result = CancelSubscriptionHandler::new(users, billing.clone())
            .handle(CancelSubscriptionCommand {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(BillingError::AdminForbidden { .. })));
        assert!(billing.cancelled_ids().is_empty());
    }

    #[tokio::test]
    async fn missing_subscription_id_is_rejected() {
        let user = User::new(
            UserId::new("user-1").unwrap(),
            "learner@example.com",
            UserRole::User,
        );
        let users = Arc::new(MockUserRepository::with_user(user));
        let billing = Arc::new(MockBillingProvider::new());

        let result = CancelSubscriptionHandler::new(users, billing.clone())
            .handle(CancelSubscriptionCommand {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(BillingError::NoSubscription(_))));
        assert!(billing.cancelled_ids().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_keeps_status_unchanged() {
        let users = Arc::new(MockUserRepository::with_user(active_subscriber()));
        let billing = Arc::new(MockBillingProvider::failing("gateway timeout"));

        let result = CancelSubscriptionHandler::new(users.clone(), billing)
            .handle(CancelSubscriptionCommand {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await;

        match result {
            Err(BillingError::Provider { reason }) => assert_eq!(reason, "gateway timeout"),
            other => panic!("expected provider error, got {:?}", other),
        }

        let stored = users.stored(&UserId::new("user-1").unwrap()).unwrap();
        assert_eq!(stored.subscription.status, SubscriptionStatus::Active);
    }
}
