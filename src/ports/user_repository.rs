//! User repository port.
//!
//! Narrow read-modify-write interface over the user store. The billing
//! handlers load a user, mutate the embedded subscription, and save it
//! back; no locking is provided, so concurrent writes to the same user
//! are last-write-wins.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Port for loading and persisting user documents.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Persist a user, inserting or overwriting the stored document.
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
