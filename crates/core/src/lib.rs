//! `invopt-core`: shared planning primitives.
//!
//! This crate contains **pure domain** types (no IO, no HTTP, no runtime).

pub mod demand;
pub mod error;
pub mod id;

pub use demand::{DemandRecord, LeadTimeSample};
pub use error::{PlanningError, PlanningResult};
pub use id::ItemId;
