//! Policy table definitions
//!
//! Column-level layout of the three policy tables. The database owns two
//! kinds of columns the application never writes: `created_at` (insert-time
//! default, immutable) and `vendor_revenue_rate` (generated from
//! `platform_fee_rate`). The date-order and non-negativity invariants are
//! also enforced here as CHECK constraints, backing up the domain-level
//! validation.

use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// DDL for the three policy tables
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS driver_fee_policy (
    driver_fee_policy_id    BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    delivery_fee            NUMERIC(14, 2) NOT NULL CHECK (delivery_fee >= 0),
    effective_from          DATE NOT NULL,
    effective_to            DATE NOT NULL,
    created_at              TIMESTAMPTZ NOT NULL DEFAULT now(),
    CHECK (effective_from <= effective_to)
);

CREATE TABLE IF NOT EXISTS platform_fee_policy (
    fee_policy_id                BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    subscription_monthly_fee     NUMERIC(14, 2) NOT NULL CHECK (subscription_monthly_fee >= 0),
    non_subscriber_delivery_fee  NUMERIC(14, 2) NOT NULL CHECK (non_subscriber_delivery_fee >= 0),
    storage_fee_per_unit_per_day NUMERIC(14, 4) NOT NULL CHECK (storage_fee_per_unit_per_day >= 0),
    effective_from               DATE NOT NULL,
    effective_to                 DATE NOT NULL,
    created_at                   TIMESTAMPTZ NOT NULL DEFAULT now(),
    CHECK (effective_from <= effective_to)
);

CREATE TABLE IF NOT EXISTS settlement_price_policy (
    price_policy_id     BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    product_id          TEXT NOT NULL,
    vendor_id           TEXT NOT NULL,
    sales_price         NUMERIC(14, 2) NOT NULL CHECK (sales_price >= 0),
    platform_fee_rate   NUMERIC(7, 4) NOT NULL CHECK (platform_fee_rate >= 0),
    vendor_revenue_rate NUMERIC(7, 4) GENERATED ALWAYS AS (1 - platform_fee_rate) STORED,
    fee_policy_type     TEXT,
    effective_from      DATE NOT NULL,
    effective_to        DATE NOT NULL,
    created_at          TIMESTAMPTZ NOT NULL DEFAULT now(),
    CHECK (effective_from <= effective_to)
);

CREATE INDEX IF NOT EXISTS idx_driver_fee_policy_effective
    ON driver_fee_policy (effective_from, effective_to);
CREATE INDEX IF NOT EXISTS idx_platform_fee_policy_effective
    ON platform_fee_policy (effective_from, effective_to);
CREATE INDEX IF NOT EXISTS idx_settlement_price_policy_effective
    ON settlement_price_policy (effective_from, effective_to);
"#;

/// Creates the policy tables if they do not exist
pub async fn ensure_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::raw_sql(SCHEMA_SQL)
        .execute(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;
    info!("Policy schema is in place");
    Ok(())
}
