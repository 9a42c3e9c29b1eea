//! ListPaymentsHandler - Query handler for the payment record collection.

use std::sync::Arc;

use crate::domain::billing::{BillingError, PaymentRecord};
use crate::domain::foundation::UserId;
use crate::ports::{PaymentRecordRepository, UserRepository};

/// Query for the payment listing.
#[derive(Debug, Clone)]
pub struct ListPaymentsQuery {
    pub requested_by: UserId,
}

/// Handler returning the full payment record collection, newest first.
///
/// Admin-only; there is no pagination, the collection is returned whole.
pub struct ListPaymentsHandler {
    users: Arc<dyn UserRepository>,
    payments: Arc<dyn PaymentRecordRepository>,
}

impl ListPaymentsHandler {
    pub fn new(users: Arc<dyn UserRepository>, payments: Arc<dyn PaymentRecordRepository>) -> Self {
        Self { users, payments }
    }

    pub async fn handle(&self, query: ListPaymentsQuery) -> Result<Vec<PaymentRecord>, BillingError> {
        let user = self
            .users
            .find_by_id(&query.requested_by)
            .await?
            .ok_or_else(|| BillingError::user_not_found(query.requested_by.clone()))?;

        if !user.is_admin() {
            return Err(BillingError::admin_only("list payments"));
        }

        let mut records = self.payments.list_all().await?;
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }
}
