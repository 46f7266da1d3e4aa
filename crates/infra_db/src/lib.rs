//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL side of the slip service using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`SlipRepository`] implements the
//! domain's `SlipPort` and hides every SQL statement from the layers above.
//! The `slips` table is expected to exist already; see `migrations/` at the
//! workspace root.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, SlipRepository, create_pool};
//!
//! let pool = create_pool(DatabaseConfig::new("localhost", "meta", "meta", "secret")).await?;
//! let repo = SlipRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, ping, DatabaseConfig, DatabasePool};
pub use repositories::SlipRepository;
