//! `invopt-planning`
//!
//! **Responsibility:** the computational core of the service.
//!
//! - Safety stock sizing from historical demand and a target service level.
//! - A deterministic 30-day inventory projection under average demand and lead time.
//!
//! Nothing here owns a runtime, a socket or a clock. Historical demand reaches the
//! estimator through the [`HistoricalDataProvider`] seam.

pub mod lead_time;
pub mod provider;
pub mod safety_stock;
pub mod service_level;
pub mod stats;

pub use lead_time::{SIMULATION_HORIZON_DAYS, SimulationDay, SimulationResult, simulate_lead_time};
pub use provider::HistoricalDataProvider;
pub use safety_stock::{SafetyStockResult, compute_safety_stock, estimate_safety_stock};
pub use service_level::z_score;
