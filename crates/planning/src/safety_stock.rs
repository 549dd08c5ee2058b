use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use invopt_core::{DemandRecord, ItemId, PlanningError, PlanningResult};

use crate::provider::HistoricalDataProvider;
use crate::service_level::z_score;
use crate::stats::{finite, mean, stddev_sample};

/// Safety stock sizing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyStockResult {
    pub item_id: ItemId,
    pub safety_stock: f64,
    pub average_demand: f64,
    pub standard_deviation: f64,
    pub data_points_used: usize,
    pub service_level: f64,
    pub z_score: f64,
}

/// Fetch historical demand for `item_id` and size its safety stock.
///
/// The service level is validated before any I/O. The fetch is the only
/// suspension point; dropping the future abandons it.
pub async fn estimate_safety_stock(
    provider: &dyn HistoricalDataProvider,
    item_id: &ItemId,
    desired_service_level: f64,
) -> PlanningResult<SafetyStockResult> {
    let z = z_score(desired_service_level)?;

    info!(item_id = %item_id, "fetching historical demand");
    let records = provider.fetch_demand(item_id).await?;
    info!(item_id = %item_id, records = records.len(), "received historical demand");

    size_safety_stock(item_id, &records, desired_service_level, z)
}

/// Size safety stock from an already-fetched demand series.
///
/// Model: `safety_stock = z(service_level) * s`, where `s` is the sample
/// standard deviation of the usable quantities. Records with a negative or
/// non-finite quantity are skipped. A single usable observation has no spread,
/// so it yields `s = 0` and a zero safety stock.
pub fn compute_safety_stock(
    item_id: &ItemId,
    records: &[DemandRecord],
    desired_service_level: f64,
) -> PlanningResult<SafetyStockResult> {
    let z = z_score(desired_service_level)?;
    size_safety_stock(item_id, records, desired_service_level, z)
}

/// `z` must be the z-score of `desired_service_level`.
fn size_safety_stock(
    item_id: &ItemId,
    records: &[DemandRecord],
    desired_service_level: f64,
    z: f64,
) -> PlanningResult<SafetyStockResult> {
    let quantities: Vec<f64> = records
        .iter()
        .filter(|r| r.is_usable())
        .map(|r| r.quantity)
        .collect();

    let skipped = records.len() - quantities.len();
    if skipped > 0 {
        warn!(item_id = %item_id, skipped, "ignoring demand records with unusable quantities");
    }

    let Some(average_demand) = mean(&quantities) else {
        return Err(PlanningError::no_historical_data(format!(
            "no usable demand records for item {item_id}"
        )));
    };
    let average_demand = finite("average_demand", average_demand)?;
    let standard_deviation = finite(
        "standard_deviation",
        stddev_sample(&quantities, average_demand).unwrap_or(0.0),
    )?;
    let safety_stock = finite("safety_stock", z * standard_deviation)?;

    let result = SafetyStockResult {
        item_id: item_id.clone(),
        safety_stock,
        average_demand,
        standard_deviation,
        data_points_used: quantities.len(),
        service_level: desired_service_level,
        z_score: z,
    };

    info!(
        item_id = %item_id,
        safety_stock = result.safety_stock,
        data_points = result.data_points_used,
        "calculated safety stock"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct StubProvider {
        response: PlanningResult<Vec<DemandRecord>>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn returning(response: PlanningResult<Vec<DemandRecord>>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl HistoricalDataProvider for StubProvider {
        async fn fetch_demand(&self, _item_id: &ItemId) -> PlanningResult<Vec<DemandRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn item() -> ItemId {
        ItemId::parse("SKU-1").unwrap()
    }

    fn series(qs: &[f64]) -> Vec<DemandRecord> {
        qs.iter().copied().map(DemandRecord::undated).collect()
    }

    #[test]
    fn reference_series_at_95_percent() {
        let r = compute_safety_stock(&item(), &series(&[10.0, 12.0, 11.0, 13.0, 9.0]), 0.95).unwrap();

        assert!((r.average_demand - 11.0).abs() < 1e-12);
        assert!((r.standard_deviation - 1.5811).abs() < 1e-4);
        assert!((r.safety_stock - 2.6008).abs() < 1e-3);
        assert_eq!(r.safety_stock, r.z_score * r.standard_deviation);
        assert_eq!(r.data_points_used, 5);
        assert_eq!(r.service_level, 0.95);
    }

    #[test]
    fn single_observation_yields_zero_stddev() {
        let r = compute_safety_stock(&item(), &series(&[42.0]), 0.99).unwrap();
        assert_eq!(r.standard_deviation, 0.0);
        assert_eq!(r.safety_stock, 0.0);
        assert_eq!(r.average_demand, 42.0);
        assert_eq!(r.data_points_used, 1);
    }

    #[test]
    fn empty_series_is_no_historical_data() {
        let err = compute_safety_stock(&item(), &[], 0.95).unwrap_err();
        assert!(matches!(err, PlanningError::NoHistoricalData(_)));
    }

    #[test]
    fn unusable_records_are_skipped() {
        let mut records = series(&[10.0, 12.0]);
        records.push(DemandRecord::undated(-3.0));
        records.push(DemandRecord::undated(f64::NAN));

        let r = compute_safety_stock(&item(), &records, 0.9).unwrap();
        assert_eq!(r.data_points_used, 2);
        assert_eq!(r.average_demand, 11.0);

        let only_bad = series(&[-1.0, -2.0]);
        assert!(matches!(
            compute_safety_stock(&item(), &only_bad, 0.9),
            Err(PlanningError::NoHistoricalData(_))
        ));
    }

    #[test]
    fn constant_demand_needs_no_buffer() {
        let r = compute_safety_stock(&item(), &series(&[5.0, 5.0, 5.0]), 0.99).unwrap();
        assert_eq!(r.standard_deviation, 0.0);
        assert_eq!(r.safety_stock, 0.0);
    }

    #[test]
    fn overflowing_demand_is_rejected() {
        let err = compute_safety_stock(&item(), &series(&[1e308, 1e308]), 0.95).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidParameter(_)));

        // Mean fits, but the squared deviations do not.
        let err = compute_safety_stock(&item(), &series(&[0.0, 1e308]), 0.95).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn overflowing_provider_data_is_rejected() {
        let provider = StubProvider::returning(Ok(series(&[1e308, 1e308])));
        let err = estimate_safety_stock(&provider, &item(), 0.95).await.unwrap_err();
        assert!(matches!(err, PlanningError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn invalid_service_level_skips_the_fetch() {
        let provider = StubProvider::returning(Ok(series(&[1.0, 2.0])));
        let err = estimate_safety_stock(&provider, &item(), 1.5).await.unwrap_err();

        assert!(matches!(err, PlanningError::InvalidParameter(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_failures_propagate_unchanged() {
        let provider = StubProvider::returning(Err(PlanningError::data_fetch("HTTP 500")));
        let err = estimate_safety_stock(&provider, &item(), 0.95).await.unwrap_err();

        assert_eq!(err, PlanningError::data_fetch("HTTP 500"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn estimates_from_provider_data() {
        let provider = StubProvider::returning(Ok(series(&[10.0, 12.0, 11.0, 13.0, 9.0])));
        let r = estimate_safety_stock(&provider, &item(), 0.95).await.unwrap();

        assert_eq!(r.item_id, item());
        assert_eq!(r.data_points_used, 5);
        assert_eq!(r.z_score, z_score(0.95).unwrap());
        assert_eq!(r.safety_stock, r.z_score * r.standard_deviation);
        assert_eq!(r, compute_safety_stock(&item(), &series(&[10.0, 12.0, 11.0, 13.0, 9.0]), 0.95).unwrap());
    }

    #[tokio::test]
    async fn empty_provider_response_is_no_historical_data() {
        let provider = StubProvider::returning(Ok(Vec::new()));
        let err = estimate_safety_stock(&provider, &item(), 0.95).await.unwrap_err();
        assert!(matches!(err, PlanningError::NoHistoricalData(_)));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: two or more distinct quantities always produce a positive spread,
            /// and the safety stock is exactly z times that spread.
            #[test]
            fn distinct_values_give_positive_stddev(
                mut qs in prop::collection::vec(0u32..10_000, 2..50),
                level in 0.5f64..0.999,
            ) {
                if qs.iter().all(|q| *q == qs[0]) {
                    qs[0] += 1;
                }
                let records: Vec<DemandRecord> =
                    qs.iter().map(|q| DemandRecord::undated(*q as f64)).collect();

                let r = compute_safety_stock(&item(), &records, level).unwrap();
                prop_assert!(r.standard_deviation > 0.0);
                prop_assert!(r.safety_stock >= 0.0);
                prop_assert_eq!(r.safety_stock, z_score(level).unwrap() * r.standard_deviation);
                prop_assert_eq!(r.data_points_used, qs.len());
            }
        }
    }
}
