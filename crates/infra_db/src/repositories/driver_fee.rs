//! Driver fee policy repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use domain_settlement::driver_fee::{DriverFeePolicy, NewDriverFeePolicy};
use domain_settlement::ports::DriverFeePolicyStore;
use settlement_kernel::{DriverFeePolicyId, StoreError};

use crate::error::DatabaseError;

/// PostgreSQL-backed store for driver fee policies
///
/// `created_at` is assigned by the table's insert-time default and read back
/// via `RETURNING`; the application never supplies it.
#[derive(Debug, Clone)]
pub struct PgDriverFeePolicyStore {
    pool: PgPool,
}

impl PgDriverFeePolicyStore {
    /// Creates a new store backed by the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DriverFeePolicyRow {
    driver_fee_policy_id: i64,
    delivery_fee: Decimal,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<DriverFeePolicyRow> for DriverFeePolicy {
    fn from(row: DriverFeePolicyRow) -> Self {
        DriverFeePolicy {
            id: DriverFeePolicyId::new(row.driver_fee_policy_id),
            delivery_fee: row.delivery_fee,
            effective_from: row.effective_from,
            effective_to: row.effective_to,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl DriverFeePolicyStore for PgDriverFeePolicyStore {
    async fn create(&self, draft: NewDriverFeePolicy) -> Result<DriverFeePolicy, StoreError> {
        draft.validate()?;

        let row = sqlx::query_as::<_, DriverFeePolicyRow>(
            r#"
            INSERT INTO driver_fee_policy (delivery_fee, effective_from, effective_to)
            VALUES ($1, $2, $3)
            RETURNING driver_fee_policy_id, delivery_fee, effective_from, effective_to, created_at
            "#,
        )
        .bind(draft.delivery_fee)
        .bind(draft.effective_from)
        .bind(draft.effective_to)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        debug!(id = row.driver_fee_policy_id, "Inserted driver fee policy");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DriverFeePolicyId) -> Result<DriverFeePolicy, StoreError> {
        let row = sqlx::query_as::<_, DriverFeePolicyRow>(
            r#"
            SELECT driver_fee_policy_id, delivery_fee, effective_from, effective_to, created_at
            FROM driver_fee_policy
            WHERE driver_fee_policy_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        row.map(DriverFeePolicy::from)
            .ok_or_else(|| StoreError::not_found("DriverFeePolicy", id))
    }

    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DriverFeePolicy>, StoreError> {
        let rows = sqlx::query_as::<_, DriverFeePolicyRow>(
            r#"
            SELECT driver_fee_policy_id, delivery_fee, effective_from, effective_to, created_at
            FROM driver_fee_policy
            WHERE effective_from <= $1 AND effective_to >= $1
            ORDER BY driver_fee_policy_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        Ok(rows.into_iter().map(DriverFeePolicy::from).collect())
    }
}
