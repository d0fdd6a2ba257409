//! Platform fee policy repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use domain_settlement::platform_fee::{NewPlatformFeePolicy, PlatformFeePolicy};
use domain_settlement::ports::PlatformFeePolicyStore;
use settlement_kernel::{PlatformFeePolicyId, StoreError};

use crate::error::DatabaseError;

/// PostgreSQL-backed store for platform fee policies
#[derive(Debug, Clone)]
pub struct PgPlatformFeePolicyStore {
    pool: PgPool,
}

impl PgPlatformFeePolicyStore {
    /// Creates a new store backed by the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlatformFeePolicyRow {
    fee_policy_id: i64,
    subscription_monthly_fee: Decimal,
    non_subscriber_delivery_fee: Decimal,
    storage_fee_per_unit_per_day: Decimal,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<PlatformFeePolicyRow> for PlatformFeePolicy {
    fn from(row: PlatformFeePolicyRow) -> Self {
        PlatformFeePolicy {
            id: PlatformFeePolicyId::new(row.fee_policy_id),
            subscription_monthly_fee: row.subscription_monthly_fee,
            non_subscriber_delivery_fee: row.non_subscriber_delivery_fee,
            storage_fee_per_unit_per_day: row.storage_fee_per_unit_per_day,
            effective_from: row.effective_from,
            effective_to: row.effective_to,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PlatformFeePolicyStore for PgPlatformFeePolicyStore {
    async fn create(&self, draft: NewPlatformFeePolicy) -> Result<PlatformFeePolicy, StoreError> {
        draft.validate()?;

        let row = sqlx::query_as::<_, PlatformFeePolicyRow>(
            r#"
            INSERT INTO platform_fee_policy (
                subscription_monthly_fee,
                non_subscriber_delivery_fee,
                storage_fee_per_unit_per_day,
                effective_from,
                effective_to
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                fee_policy_id,
                subscription_monthly_fee,
                non_subscriber_delivery_fee,
                storage_fee_per_unit_per_day,
                effective_from,
                effective_to,
                created_at
            "#,
        )
        .bind(draft.subscription_monthly_fee)
        .bind(draft.non_subscriber_delivery_fee)
        .bind(draft.storage_fee_per_unit_per_day)
        .bind(draft.effective_from)
        .bind(draft.effective_to)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        debug!(id = row.fee_policy_id, "Inserted platform fee policy");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: PlatformFeePolicyId) -> Result<PlatformFeePolicy, StoreError> {
        let row = sqlx::query_as::<_, PlatformFeePolicyRow>(
            r#"
            SELECT
                fee_policy_id,
                subscription_monthly_fee,
                non_subscriber_delivery_fee,
                storage_fee_per_unit_per_day,
                effective_from,
                effective_to,
                created_at
            FROM platform_fee_policy
            WHERE fee_policy_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        row.map(PlatformFeePolicy::from)
            .ok_or_else(|| StoreError::not_found("PlatformFeePolicy", id))
    }

    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<PlatformFeePolicy>, StoreError> {
        let rows = sqlx::query_as::<_, PlatformFeePolicyRow>(
            r#"
            SELECT
                fee_policy_id,
                subscription_monthly_fee,
                non_subscriber_delivery_fee,
                storage_fee_per_unit_per_day,
                effective_from,
                effective_to,
                created_at
            FROM platform_fee_policy
            WHERE effective_from <= $1 AND effective_to >= $1
            ORDER BY fee_policy_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        Ok(rows.into_iter().map(PlatformFeePolicy::from).collect())
    }
}
