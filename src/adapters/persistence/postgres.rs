//! PostgreSQL repositories.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id                  TEXT PRIMARY KEY,
//!     email               TEXT NOT NULL,
//!     role                TEXT NOT NULL,
//!     subscription_id     TEXT,
//!     subscription_status TEXT NOT NULL DEFAULT 'none'
//! );
//!
//! CREATE TABLE payments (
//!     id              UUID PRIMARY KEY,
//!     user_id         TEXT NOT NULL REFERENCES users (id),
//!     payment_id      TEXT NOT NULL,
//!     signature       TEXT NOT NULL,
//!     subscription_id TEXT NOT NULL,
//!     recorded_at     TIMESTAMPTZ NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::billing::{PaymentRecord, SubscriptionStatus};
use crate::domain::foundation::{DomainError, PaymentRecordId, Timestamp, UserId};
use crate::domain::user::{User, UserRole, UserSubscription};
use crate::ports::{PaymentRecordRepository, UserRepository};

/// User repository backed by the `users` table.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let email: String = row.try_get("email").map_err(db_err)?;
        let role: String = row.try_get("role").map_err(db_err)?;
        let subscription_id: Option<String> = row.try_get("subscription_id").map_err(db_err)?;
        let subscription_status: String =
            row.try_get("subscription_status").map_err(db_err)?;

        let id = UserId::new(id)
            .map_err(|e| DomainError::database(format!("corrupt user id: {}", e)))?;
        let role = UserRole::parse(&role)
            .ok_or_else(|| DomainError::database(format!("unknown role: {}", role)))?;
        let status = SubscriptionStatus::parse(&subscription_status).ok_or_else(|| {
            DomainError::database(format!("unknown subscription status: {}", subscription_status))
        })?;

        Ok(User {
            id,
            email,
            role,
            subscription: UserSubscription {
                id: subscription_id,
                status,
            },
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, role, subscription_id, subscription_status \
             FROM users WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO users (id, email, role, subscription_id, subscription_status) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                 email = EXCLUDED.email, \
                 role = EXCLUDED.role, \
                 subscription_id = EXCLUDED.subscription_id, \
                 subscription_status = EXCLUDED.subscription_status",
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&user.subscription.id)
        .bind(user.subscription.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }
}

/// Payment record repository backed by the `payments` table.
pub struct PgPaymentRecords {
    pool: PgPool,
}

impl PgPaymentRecords {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<PaymentRecord, DomainError> {
        let id: Uuid = row.try_get("id").map_err(db_err)?;
        let user_id: String = row.try_get("user_id").map_err(db_err)?;
        let payment_id: String = row.try_get("payment_id").map_err(db_err)?;
        let signature: String = row.try_get("signature").map_err(db_err)?;
        let subscription_id: String = row.try_get("subscription_id").map_err(db_err)?;
        let recorded_at: DateTime<Utc> = row.try_get("recorded_at").map_err(db_err)?;

        let user_id = UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("corrupt user id: {}", e)))?;

        Ok(PaymentRecord {
            id: PaymentRecordId::from_uuid(id),
            user_id,
            provider_payment_id: payment_id,
            provider_signature: signature,
            provider_subscription_id: subscription_id,
            recorded_at: Timestamp::from_datetime(recorded_at),
        })
    }
}

#[async_trait]
impl PaymentRecordRepository for PgPaymentRecords {
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO payments (id, user_id, payment_id, signature, subscription_id, recorded_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_str())
        .bind(&record.provider_payment_id)
        .bind(&record.provider_signature)
        .bind(&record.provider_subscription_id)
        .bind(record.recorded_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<PaymentRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, payment_id, signature, subscription_id, recorded_at \
             FROM payments ORDER BY recorded_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_record).collect()
    }
}

fn db_err(err: sqlx::Error) -> DomainError {
    DomainError::database(err.to_string())
}
