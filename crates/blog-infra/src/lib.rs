//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `database` (default) - SeaORM store for PostgreSQL and SQLite
//!
//! Without `database` only the in-memory store is available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "database")]
pub use database::{SeaOrmPostRepository, connect};
