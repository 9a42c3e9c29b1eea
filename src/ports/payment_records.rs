//! Payment record repository port.

use async_trait::async_trait;

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::DomainError;

/// Port for the append-only payment record collection.
///
/// Records are only ever appended; there is no update or delete.
#[async_trait]
pub trait PaymentRecordRepository: Send + Sync {
    /// Append a verified payment record.
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// List every payment record, newest first.
    async fn list_all(&self) -> Result<Vec<PaymentRecord>, DomainError>;
}
