//! Settlement Kernel - Foundational types for the settlement system
//!
//! This crate provides the fundamental building blocks used across the
//! settlement domain and infrastructure crates:
//! - Strongly-typed surrogate identifiers for policy records
//! - Effective-period types for date-bounded policies
//! - The uniform store error taxonomy

pub mod error;
pub mod identifiers;
pub mod temporal;

pub use error::StoreError;
pub use identifiers::{DriverFeePolicyId, PlatformFeePolicyId, PricePolicyId};
pub use temporal::{EffectivePeriod, TemporalError};
