//! Descriptive statistics over demand and lead-time samples.
//!
//! All functions are deterministic and return `None` where the statistic is
//! undefined instead of dividing by zero.

use invopt_core::{PlanningError, PlanningResult};

pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / (xs.len() as f64))
}

/// Sample standard deviation (n-1).
///
/// Undefined for fewer than two observations.
pub fn stddev_sample(xs: &[f64], mean: f64) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    Some((sum_sq_dev(xs, mean) / ((xs.len() - 1) as f64)).sqrt())
}

/// Population standard deviation (n).
pub fn stddev_population(xs: &[f64], mean: f64) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some((sum_sq_dev(xs, mean) / (xs.len() as f64)).sqrt())
}

/// Reject a derived quantity that overflowed (or otherwise left the reals).
///
/// Inputs are checked for finiteness up front, but sums and products of large
/// finite inputs can still reach infinity.
pub fn finite(field: &str, value: f64) -> PlanningResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanningError::invalid_parameter(format!(
            "{field} is not representable (inputs too large)"
        )))
    }
}

fn sum_sq_dev(xs: &[f64], mean: f64) -> f64 {
    xs.iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum()
}
