//! In-memory store adapter
//!
//! Implements all three policy store ports over in-process tables. Behavior
//! mirrors the PostgreSQL stores: identities are assigned from a per-table
//! monotonic counter, `created_at` is assigned at insert time, and
//! `vendor_revenue_rate` is derived from the platform fee rate. Unlike the
//! PostgreSQL path, which leans on the column default for `created_at`, this
//! adapter assigns the timestamp in code at insert time; the two strategies
//! are equivalent from the caller's point of view.
//!
//! Intended for tests and local development; nothing here is durable.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use domain_settlement::driver_fee::{DriverFeePolicy, NewDriverFeePolicy};
use domain_settlement::platform_fee::{NewPlatformFeePolicy, PlatformFeePolicy};
use domain_settlement::ports::{DriverFeePolicyStore, PlatformFeePolicyStore, PricePolicyStore};
use domain_settlement::price_policy::{NewSettlementPricePolicy, SettlementPricePolicy};
use settlement_kernel::{DriverFeePolicyId, PlatformFeePolicyId, PricePolicyId, StoreError};

/// One append-only table with a monotonic identity counter
#[derive(Debug)]
struct MemTable<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T> Default for MemTable<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> MemTable<T> {
    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory implementation of every policy store port
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::InMemorySettlementStore;
/// use domain_settlement::ports::DriverFeePolicyStore;
///
/// let store = InMemorySettlementStore::new();
/// let created = store.create(draft).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemorySettlementStore {
    driver_fees: RwLock<MemTable<DriverFeePolicy>>,
    platform_fees: RwLock<MemTable<PlatformFeePolicy>>,
    price_policies: RwLock<MemTable<SettlementPricePolicy>>,
}

impl InMemorySettlementStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DriverFeePolicyStore for InMemorySettlementStore {
    async fn create(&self, draft: NewDriverFeePolicy) -> Result<DriverFeePolicy, StoreError> {
        draft.validate()?;

        let mut table = self.driver_fees.write().await;
        let policy = DriverFeePolicy {
            id: DriverFeePolicyId::new(table.assign_id()),
            delivery_fee: draft.delivery_fee,
            effective_from: draft.effective_from,
            effective_to: draft.effective_to,
            created_at: Utc::now(),
        };
        table.rows.push(policy.clone());
        Ok(policy)
    }

    async fn find_by_id(&self, id: DriverFeePolicyId) -> Result<DriverFeePolicy, StoreError> {
        let table = self.driver_fees.read().await;
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("DriverFeePolicy", id))
    }

    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DriverFeePolicy>, StoreError> {
        let table = self.driver_fees.read().await;
        let mut matches: Vec<_> = table
            .rows
            .iter()
            .filter(|p| p.is_effective_on(date))
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(matches)
    }
}

#[async_trait]
impl PlatformFeePolicyStore for InMemorySettlementStore {
    async fn create(&self, draft: NewPlatformFeePolicy) -> Result<PlatformFeePolicy, StoreError> {
        draft.validate()?;

        let mut table = self.platform_fees.write().await;
        let policy = PlatformFeePolicy {
            id: PlatformFeePolicyId::new(table.assign_id()),
            subscription_monthly_fee: draft.subscription_monthly_fee,
            non_subscriber_delivery_fee: draft.non_subscriber_delivery_fee,
            storage_fee_per_unit_per_day: draft.storage_fee_per_unit_per_day,
            effective_from: draft.effective_from,
            effective_to: draft.effective_to,
            created_at: Utc::now(),
        };
        table.rows.push(policy.clone());
        Ok(policy)
    }

    async fn find_by_id(&self, id: PlatformFeePolicyId) -> Result<PlatformFeePolicy, StoreError> {
        let table = self.platform_fees.read().await;
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("PlatformFeePolicy", id))
    }

    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<PlatformFeePolicy>, StoreError> {
        let table = self.platform_fees.read().await;
        let mut matches: Vec<_> = table
            .rows
            .iter()
            .filter(|p| p.is_effective_on(date))
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(matches)
    }
}

#[async_trait]
impl PricePolicyStore for InMemorySettlementStore {
    async fn create(
        &self,
        draft: NewSettlementPricePolicy,
    ) -> Result<SettlementPricePolicy, StoreError> {
        draft.validate()?;

        let mut table = self.price_policies.write().await;
        let policy = SettlementPricePolicy {
            id: PricePolicyId::new(table.assign_id()),
            product_id: draft.product_id,
            vendor_id: draft.vendor_id,
            sales_price: draft.sales_price,
            platform_fee_rate: draft.platform_fee_rate,
            // Same derivation as the generated column in PostgreSQL
            vendor_revenue_rate: Decimal::ONE - draft.platform_fee_rate,
            fee_policy_type: draft.fee_policy_type,
            effective_from: draft.effective_from,
            effective_to: draft.effective_to,
            created_at: Utc::now(),
        };
        table.rows.push(policy.clone());
        Ok(policy)
    }

    async fn find_by_id(&self, id: PricePolicyId) -> Result<SettlementPricePolicy, StoreError> {
        let table = self.price_policies.read().await;
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("SettlementPricePolicy", id))
    }

    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<SettlementPricePolicy>, StoreError> {
        let table = self.price_policies.read().await;
        let mut matches: Vec<_> = table
            .rows
            .iter()
            .filter(|p| p.is_effective_on(date))
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(matches)
    }
}
