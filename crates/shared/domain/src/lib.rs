//! # Domain Models
//!
//! Plain data for the feature-status dashboard: descriptors, lifecycle statuses,
//! status filters, and the configuration shape consumed by the CLI.
//! Dependencies stay at `serde` and `bitflags`; no I/O or markup lives here.

pub mod config;
pub mod constants;
pub mod descriptor;
pub mod status;

pub use descriptor::FeatureDescriptor;
pub use status::{Status, StatusSet};
