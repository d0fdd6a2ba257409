//! Alternative store adapters
//!
//! Adapters implementing the policy store ports against something other than
//! PostgreSQL. Currently only the in-memory adapter used by tests and local
//! development.

pub mod memory;
