//! Settlement Policy Store Ports
//!
//! One port trait per policy record type, each with the same uniform
//! contract. Adapters implement these traits to provide either the internal
//! PostgreSQL store (infra_db) or an in-memory store for tests and local use.
//!
//! # Contract
//!
//! - `create` validates the draft, performs exactly one durable insert, and
//!   returns the persisted record with its storage-assigned identity and
//!   creation timestamp.
//! - `find_by_id` fails with `StoreError::NotFound` on a miss.
//! - `find_effective_on` returns every record whose inclusive effective range
//!   contains the given date, in ascending identity order.
//!
//! There are no update or delete operations: policy corrections are made by
//! inserting a new row with a new effective range, preserving history.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_settlement::ports::DriverFeePolicyStore;
//! use std::sync::Arc;
//!
//! pub struct SettlementService {
//!     driver_fees: Arc<dyn DriverFeePolicyStore>,
//! }
//!
//! impl SettlementService {
//!     pub async fn fee_for(&self, date: NaiveDate) -> Result<Vec<DriverFeePolicy>, StoreError> {
//!         self.driver_fees.find_effective_on(date).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;

use settlement_kernel::{DriverFeePolicyId, PlatformFeePolicyId, PricePolicyId, StoreError};

use crate::driver_fee::{DriverFeePolicy, NewDriverFeePolicy};
use crate::platform_fee::{NewPlatformFeePolicy, PlatformFeePolicy};
use crate::price_policy::{NewSettlementPricePolicy, SettlementPricePolicy};

/// Persistence port for driver fee policies
#[async_trait]
pub trait DriverFeePolicyStore: Send + Sync {
    /// Validates and durably persists a new policy
    async fn create(&self, draft: NewDriverFeePolicy) -> Result<DriverFeePolicy, StoreError>;

    /// Returns the policy with the given identity
    async fn find_by_id(&self, id: DriverFeePolicyId) -> Result<DriverFeePolicy, StoreError>;

    /// Returns all policies effective on the given date, ascending by identity
    async fn find_effective_on(&self, date: NaiveDate)
        -> Result<Vec<DriverFeePolicy>, StoreError>;
}

/// Persistence port for platform fee policies
#[async_trait]
pub trait PlatformFeePolicyStore: Send + Sync {
    /// Validates and durably persists a new policy
    async fn create(&self, draft: NewPlatformFeePolicy) -> Result<PlatformFeePolicy, StoreError>;

    /// Returns the policy with the given identity
    async fn find_by_id(&self, id: PlatformFeePolicyId) -> Result<PlatformFeePolicy, StoreError>;

    /// Returns all policies effective on the given date, ascending by identity
    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<PlatformFeePolicy>, StoreError>;
}

/// Persistence port for settlement price policies
#[async_trait]
pub trait PricePolicyStore: Send + Sync {
    /// Validates and durably persists a new policy
    ///
    /// The returned record carries the `vendor_revenue_rate` storage derived
    /// from the platform fee rate; callers never supply it.
    async fn create(
        &self,
        draft: NewSettlementPricePolicy,
    ) -> Result<SettlementPricePolicy, StoreError>;

    /// Returns the policy with the given identity
    async fn find_by_id(&self, id: PricePolicyId) -> Result<SettlementPricePolicy, StoreError>;

    /// Returns all policies effective on the given date, ascending by identity
    async fn find_effective_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<SettlementPricePolicy>, StoreError>;
}
