//! Slip Domain
//!
//! This crate holds everything the slip service knows about its single
//! resource, independent of how it is stored or transported.
//!
//! # Layers
//!
//! - **Entity**: [`Slip`] as read back from the store, [`SlipDraft`] as
//!   supplied by a caller
//! - **Port**: [`SlipPort`], the repository capability set implemented by
//!   storage adapters (PostgreSQL in `infra_db`, in-memory behind `mock`)
//! - **Service**: [`SlipService`], the seam between transport and storage
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_slip::{SlipDraft, SlipService};
//! use std::sync::Arc;
//!
//! let service = SlipService::new(Arc::new(repository));
//! service.create_slip(SlipDraft::new("Lorem ipsum", ["tag1", "tag2"])).await?;
//! let slips = service.get_all_slips().await?;
//! ```

pub mod error;
pub mod ports;
pub mod service;
pub mod slip;

pub use error::SlipError;
pub use ports::SlipPort;
pub use service::SlipService;
pub use slip::{Slip, SlipDraft, SlipId};

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockSlipPort;
