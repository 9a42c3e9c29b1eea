//! Repository adapters.

mod in_memory;
mod postgres;

pub use in_memory::{InMemoryPaymentRecords, InMemoryUserRepository};
pub use postgres::{PgPaymentRecords, PgUserRepository};
