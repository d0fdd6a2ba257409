//! Settlement Policy Domain
//!
//! This crate defines the three time-bounded policy record types of the
//! settlement domain and the port traits through which they are persisted:
//!
//! - [`DriverFeePolicy`] - the per-delivery amount paid to drivers
//! - [`PlatformFeePolicy`] - subscription, delivery, and storage fees charged
//!   to hospitals
//! - [`SettlementPricePolicy`] - per-product sales price and fee-rate split
//!   between the platform and the consigning vendor
//!
//! Records are append-only: each is created once with a storage-assigned
//! identity and creation timestamp, read frequently by effective-date lookups,
//! and never updated or deleted. Corrections are made by inserting a new row
//! with a new effective range.

pub mod driver_fee;
pub mod error;
pub mod platform_fee;
pub mod ports;
pub mod price_policy;
pub mod validation;

pub use driver_fee::{DriverFeePolicy, NewDriverFeePolicy};
pub use error::ValidationError;
pub use platform_fee::{NewPlatformFeePolicy, PlatformFeePolicy};
pub use ports::{DriverFeePolicyStore, PlatformFeePolicyStore, PricePolicyStore};
pub use price_policy::{FeePolicyType, NewSettlementPricePolicy, SettlementPricePolicy};
