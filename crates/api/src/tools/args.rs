//! Tool argument DTOs.

use serde::Deserialize;

use invopt_core::{DemandRecord, ItemId, LeadTimeSample};

#[derive(Debug, Deserialize)]
pub struct OptimizeSafetyStockArgs {
    pub item_id: ItemId,
    pub desired_service_level: f64,
}

#[derive(Debug, Deserialize)]
pub struct SimulateLeadTimeArgs {
    pub item_id: ItemId,
    pub lead_times: Vec<LeadTimeSample>,
    pub demand_data: Vec<DemandRecord>,
}
