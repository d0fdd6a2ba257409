//! Settlement price policy repository
//!
//! `vendor_revenue_rate` is a generated column; inserts never mention it and
//! every statement reads it back via `RETURNING`/`SELECT` so callers always
//! see the storage-derived value.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use domain_settlement::ports::PricePolicyStore;
use domain_settlement::price_policy::{
    FeePolicyType, NewSettlementPricePolicy, SettlementPricePolicy,
};
use settlement_kernel::{PricePolicyId, StoreError};

use crate::error::DatabaseError;

/// PostgreSQL-backed store for settlement price policies
#[derive(Debug, Clone)]
pub struct PgPricePolicyStore {
    pool: PgPool,
}

impl PgPricePolicyStore {
    /// Creates a new store backed by the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SettlementPricePolicyRow {
    price_policy_id: i64,
    product_id: String,
    vendor_id: String,
    sales_price: Decimal,
    platform_fee_rate: Decimal,
    vendor_revenue_rate: Decimal,
    fee_policy_type: Option<String>,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<SettlementPricePolicyRow> for SettlementPricePolicy {
    type Error = DatabaseError;

    fn try_from(row: SettlementPricePolicyRow) -> Result<Self, Self::Error> {
        // Enum columns store the symbolic name; an unknown name means the
        // row was written by a newer deployment.
        let fee_policy_type = row
            .fee_policy_type
            .as_deref()
            .map(str::parse::<FeePolicyType>)
            .transpose()
            .map_err(|e| DatabaseError::Serialization(e.to_string()))?;

        Ok(SettlementPricePolicy {
            id: PricePolicyId::new(row.price_policy_id),
            product_id: row.product_id,
            vendor_id: row.vendor_id,
            sales_price: row.sales_price,
            platform_fee_rate: row.platform_fee_rate,
            vendor_revenue_rate: row.vendor_revenue_rate,
            fee_policy_type,
            effective_from: row.effective_from,
            effective_to: row.effective_to,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PricePolicyStore for PgPricePolicyStore {
    async fn create(
        &self,
        draft: NewSettlementPricePolicy,
    ) -> Result<SettlementPricePolicy, StoreError> {
        draft.validate()?;

        let row = sqlx::query_as::<_, SettlementPricePolicyRow>(
            r#"
            INSERT INTO settlement_price_policy (
                product_id,
                vendor_id,
                sales_price,
                platform_fee_rate,
                fee_policy_type,
                effective_from,
                effective_to
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                price_policy_id,
                product_id,
                vendor_id,
                sales_price,
                platform_fee_rate,
                vendor_revenue_rate,
                fee_policy_type,
                effective_from,
                effective_to,
                created_at
            "#,
        )
        .bind(&draft.product_id)
        .bind(&draft.vendor_id)
        .bind(draft.sales_price)
        .bind(draft.platform_fee_rate)
        .bind(draft.fee_policy_type.map(|t| t.as_str()))
        .bind(draft.effective_from)
        .bind(draft.effective_to)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        debug!(id = row.price_policy_id, "Inserted settlement price policy");
        Ok(SettlementPricePolicy::try_from(row)?)
    }

    async fn find_by_id(&self, id: PricePolicyId) -> Result<SettlementPricePolicy, StoreError> {
        let row = sqlx::query_as::<_, SettlementPricePolicyRow>(
            r#"
            SELECT
                price_policy_id,
                product_id,
                vendor_id,
                sales_price,
                platform_fee_rate,
                vendor_revenue_rate,
                fee_policy_type,
                effective_from,
                effective_to,
                created_at
            FROM settlement_price_policy
            WHERE price_policy_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        match row {
            Some(row) => Ok(SettlementPricePolicy::try_from(row)?),
            None => Err(StoreError::not_found("SettlementPricePolicy", id)),
        }
    }

    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<SettlementPricePolicy>, StoreError> {
        let rows = sqlx::query_as::<_, SettlementPricePolicyRow>(
            r#"
            SELECT
                price_policy_id,
                product_id,
                vendor_id,
                sales_price,
                platform_fee_rate,
                vendor_revenue_rate,
                fee_policy_type,
                effective_from,
                effective_to,
                created_at
            FROM settlement_price_policy
            WHERE effective_from <= $1 AND effective_to >= $1
            ORDER BY price_policy_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

        rows.into_iter()
            .map(|row| SettlementPricePolicy::try_from(row).map_err(StoreError::from))
            .collect()
    }
}
