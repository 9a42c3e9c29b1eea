//! VerifyPaymentHandler - Command handler for payment signature verification.

use std::sync::Arc;

use crate::domain::billing::{BillingError, PaymentRecord, SignatureVerifier};
use crate::domain::foundation::UserId;
use crate::ports::{PaymentRecordRepository, UserRepository};

/// Command carrying the provider's payment notification fields.
#[derive(Debug, Clone)]
pub struct VerifyPaymentCommand {
    pub user_id: UserId,
    pub payment_id: String,
    pub signature: String,
    pub subscription_id: String,
}

/// Handler verifying a payment notification and activating the subscription.
///
/// The payment record is appended only after the signature verifies; a
/// mismatch writes nothing.
pub struct VerifyPaymentHandler {
    users: Arc<dyn UserRepository>,
    payments: Arc<dyn PaymentRecordRepository>,
    verifier: Arc<SignatureVerifier>,
}

impl VerifyPaymentHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        payments: Arc<dyn PaymentRecordRepository>,
        verifier: Arc<SignatureVerifier>,
    ) -> Self {
        Self {
            users,
            payments,
            verifier,
        }
    }

    pub async fn handle(&self, cmd: VerifyPaymentCommand) -> Result<(), BillingError> {
        // 1. Load the user
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| BillingError::user_not_found(cmd.user_id.clone()))?;

        // 2. Verify the signature before touching any state
        if let Err(err) =
            self.verifier
                .verify(&cmd.payment_id, &cmd.subscription_id, &cmd.signature)
        {
            tracing::warn!(
                user_id = %cmd.user_id,
                payment_id = %cmd.payment_id,
                "payment signature verification failed"
            );
            return Err(err);
        }

        // 3. Append the payment record
        let record = PaymentRecord::new(
            user.id.clone(),
            cmd.payment_id,
            cmd.signature,
            cmd.subscription_id,
        );
        self.payments.append(&record).await?;

        // 4. Activate and persist
        user.subscription.activate();
        self.users.save(&user).await?;

        Ok(())
    }
}
