//! Infrastructure Database Layer
//!
//! This crate provides the persistence infrastructure for the settlement
//! policy records, implementing the store ports from `domain_settlement`
//! on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one store per policy table,
//! each implementing the corresponding port trait so the domain layer never
//! sees SQL. An in-memory adapter implements the same ports for tests and
//! local development.
//!
//! # Storage-assigned columns
//!
//! Two columns are owned by the storage layer and never written by the
//! application:
//! - `created_at` defaults to the insert time and is immutable afterward
//! - `vendor_revenue_rate` is a generated column derived from
//!   `platform_fee_rate`
//!
//! Every insert uses `RETURNING` so these values are read back from the
//! database rather than recomputed in application code.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PgDriverFeePolicyStore};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! infra_db::ensure_schema(&pool).await?;
//! let store = PgDriverFeePolicyStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use adapters::memory::InMemorySettlementStore;
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PgDriverFeePolicyStore, PgPlatformFeePolicyStore, PgPricePolicyStore};
pub use schema::ensure_schema;
