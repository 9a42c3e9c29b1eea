//! In-memory repositories for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::{PaymentRecordRepository, UserRepository};

/// Mutex-backed user store.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Insert a user directly, bypassing the port. Test setup helper.
    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.clone(), user);
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.users
            .lock()
            .unwrap()
            .insert(user.id.clone(), user.clone());
        Ok(())
    }
}

/// Mutex-backed append-only payment record store.
pub struct InMemoryPaymentRecords {
    records: Mutex<Vec<PaymentRecord>>,
}

impl InMemoryPaymentRecords {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Number of stored records. Test assertion helper.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPaymentRecords {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRecordRepository for InMemoryPaymentRecords {
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<PaymentRecord>, DomainError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }
}
