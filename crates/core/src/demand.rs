//! Demand and lead-time observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's observed demand for an item.
///
/// `date` is optional because the historical-data feed only guarantees the
/// quantity. The feed has used both `quantity` and `demand` as the field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(alias = "demand")]
    pub quantity: f64,
}

impl DemandRecord {
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self {
            date: Some(date),
            quantity,
        }
    }

    pub fn undated(quantity: f64) -> Self {
        Self { date: None, quantity }
    }

    /// A record is usable for statistics when its quantity is a finite, non-negative number.
    pub fn is_usable(&self) -> bool {
        self.quantity.is_finite() && self.quantity >= 0.0
    }
}

/// Observed days between placing a replenishment order and receiving it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadTimeSample(pub u32);

impl LeadTimeSample {
    pub fn days(self) -> u32 {
        self.0
    }
}

impl From<u32> for LeadTimeSample {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_demand_field() {
        let rec: DemandRecord =
            serde_json::from_str(r#"{"date":"2024-01-01","demand":10}"#).unwrap();
        assert_eq!(rec.quantity, 10.0);
        assert_eq!(rec.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn date_is_optional() {
        let rec: DemandRecord = serde_json::from_str(r#"{"quantity":3.5}"#).unwrap();
        assert_eq!(rec, DemandRecord::undated(3.5));
        assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"quantity":3.5}"#);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(serde_json::from_str::<DemandRecord>(r#"{"date":"01/02/2024","quantity":1}"#).is_err());
    }

    #[test]
    fn usability() {
        assert!(DemandRecord::undated(0.0).is_usable());
        assert!(!DemandRecord::undated(-1.0).is_usable());
        assert!(!DemandRecord::undated(f64::NAN).is_usable());
    }

    #[test]
    fn lead_times_are_plain_integers() {
        let xs: Vec<LeadTimeSample> = serde_json::from_str("[5,7,6]").unwrap();
        assert_eq!(xs, vec![LeadTimeSample(5), LeadTimeSample(7), LeadTimeSample(6)]);
        assert!(serde_json::from_str::<Vec<LeadTimeSample>>("[-1]").is_err());
    }
}
