use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use invopt_core::{DemandRecord, ItemId, LeadTimeSample, PlanningError, PlanningResult};

use crate::stats::{finite, mean, stddev_population};

/// Length of every projected trace, in days.
pub const SIMULATION_HORIZON_DAYS: u32 = 30;

/// One projected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDay {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub inventory_level: f64,
    pub demand: f64,
}

/// Projection output for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub item_id: ItemId,
    pub final_inventory_level: f64,
    pub average_daily_demand: f64,
    pub average_lead_time: f64,
    pub lead_time_std_dev: f64,
    pub initial_inventory_level: f64,
    pub reorder_quantity: f64,
    pub replenishment_interval_days: u32,
    pub daily_trace: Vec<SimulationDay>,
}

/// Project inventory over a fixed 30-day horizon under average conditions.
///
/// Model (stationary averages, no variance or trend):
/// - start with one lead-time cycle of cover: `avg_demand * avg_lead_time`
/// - consume `avg_demand` every day
/// - an order for the same cycle quantity is placed on day 0 and then every
///   `max(1, round(avg_lead_time))` days; each arrives one interval after it was
///   placed, so replenishment lands on days `d > 0` with `d % interval == 0`
///
/// The trace replays averages, not the input series, so its length never
/// depends on the input lengths. Pure: identical inputs give identical output.
pub fn simulate_lead_time(
    item_id: &ItemId,
    lead_times: &[LeadTimeSample],
    demand_data: &[DemandRecord],
) -> PlanningResult<SimulationResult> {
    let lead_days: Vec<f64> = lead_times.iter().map(|l| f64::from(l.days())).collect();
    let Some(average_lead_time) = mean(&lead_days) else {
        return Err(PlanningError::invalid_parameter("lead_times must not be empty"));
    };
    let lead_time_std_dev = stddev_population(&lead_days, average_lead_time).unwrap_or(0.0);

    if let Some((idx, rec)) = demand_data.iter().enumerate().find(|(_, r)| !r.is_usable()) {
        return Err(PlanningError::invalid_parameter(format!(
            "demand_data[{idx}].quantity must be a finite non-negative number, got {}",
            rec.quantity
        )));
    }
    let quantities: Vec<f64> = demand_data.iter().map(|r| r.quantity).collect();
    let Some(average_daily_demand) = mean(&quantities) else {
        return Err(PlanningError::invalid_parameter("demand_data must not be empty"));
    };
    let average_daily_demand = finite("average_daily_demand", average_daily_demand)?;

    let cycle_quantity = finite("reorder_quantity", average_daily_demand * average_lead_time)?;
    let interval = replenishment_interval(average_lead_time);
    let first_date = demand_data
        .iter()
        .filter_map(|r| r.date)
        .max()
        .and_then(|latest| latest.checked_add_days(Days::new(1)));

    let mut inventory_level = cycle_quantity;
    let mut daily_trace = Vec::with_capacity(SIMULATION_HORIZON_DAYS as usize);

    for day in 0..SIMULATION_HORIZON_DAYS {
        inventory_level -= average_daily_demand;

        if day > 0 && day % interval == 0 {
            inventory_level += cycle_quantity;
        }
        finite("inventory_level", inventory_level)?;

        daily_trace.push(SimulationDay {
            day,
            date: first_date.and_then(|d| d.checked_add_days(Days::new(u64::from(day)))),
            inventory_level,
            demand: average_daily_demand,
        });
    }

    debug!(
        item_id = %item_id,
        average_lead_time,
        average_daily_demand,
        interval,
        final_inventory_level = inventory_level,
        "projected inventory"
    );

    Ok(SimulationResult {
        item_id: item_id.clone(),
        final_inventory_level: inventory_level,
        average_daily_demand,
        average_lead_time,
        lead_time_std_dev,
        initial_inventory_level: cycle_quantity,
        reorder_quantity: cycle_quantity,
        replenishment_interval_days: interval,
        daily_trace,
    })
}

/// Days between replenishments; never zero so the cadence check cannot divide by zero.
fn replenishment_interval(average_lead_time: f64) -> u32 {
    (average_lead_time.round() as u32).max(1)
}
