//! Test Utilities Crate
//!
//! Provides shared test infrastructure and fixtures for the slip service
//! test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built slips and drafts
//! - `database`: Disposable PostgreSQL containers with the slip schema applied

pub mod database;
pub mod fixtures;

pub use database::*;
pub use fixtures::*;
