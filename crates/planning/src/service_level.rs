//! Service level to z-score mapping.

use statrs::distribution::{ContinuousCDF, Normal};

use invopt_core::{PlanningError, PlanningResult};

/// Lowest accepted service level. At 0.5 the quantile is zero, below it the
/// one-sided safety-stock formula would go negative.
pub const MIN_SERVICE_LEVEL: f64 = 0.5;

/// Standard-normal quantile for a target probability of not stocking out.
///
/// Accepts `[0.5, 1.0)`; anything else (including NaN) is `InvalidParameter`.
/// Out-of-range levels are rejected, never clamped.
pub fn z_score(service_level: f64) -> PlanningResult<f64> {
    if !service_level.is_finite() || !(MIN_SERVICE_LEVEL..1.0).contains(&service_level) {
        return Err(PlanningError::invalid_parameter(format!(
            "desired_service_level must be in [{MIN_SERVICE_LEVEL}, 1), got {service_level}"
        )));
    }

    let z = Normal::standard().inverse_cdf(service_level);
    if !z.is_finite() {
        return Err(PlanningError::internal(format!(
            "normal quantile is not finite for service level {service_level}"
        )));
    }
    // inverse_cdf(0.5) can come back as -0.0 or a few ulps below zero.
    Ok(z.max(0.0))
}
