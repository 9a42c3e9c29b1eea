//! User aggregate with its embedded subscription.

mod user;

pub use user::{User, UserRole, UserSubscription};
