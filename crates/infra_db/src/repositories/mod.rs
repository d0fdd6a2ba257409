//! Policy store repositories
//!
//! One repository per policy table. Each implements the corresponding port
//! trait from `domain_settlement` on top of the PostgreSQL pool.

pub mod driver_fee;
pub mod platform_fee;
pub mod price_policy;

pub use driver_fee::PgDriverFeePolicyStore;
pub use platform_fee::PgPlatformFeePolicyStore;
pub use price_policy::PgPricePolicyStore;
