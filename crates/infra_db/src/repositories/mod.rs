//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Queries are checked at runtime so the workspace builds
//! without a live database.

pub mod slip;

pub use slip::{SlipRepository, SlipRow};
