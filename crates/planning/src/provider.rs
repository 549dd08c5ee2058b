use std::sync::Arc;

use async_trait::async_trait;

use invopt_core::{DemandRecord, ItemId, PlanningResult};

/// Source of historical demand for an item.
///
/// Implementations live in infra (HTTP client, in-memory fixture). Failures
/// must be reported as `PlanningError::DataFetch`; an empty series is a valid
/// answer and is judged by the estimator, not the provider.
#[async_trait]
pub trait HistoricalDataProvider: Send + Sync + 'static {
    async fn fetch_demand(&self, item_id: &ItemId) -> PlanningResult<Vec<DemandRecord>>;
}

#[async_trait]
impl<P> HistoricalDataProvider for Arc<P>
where
    P: HistoricalDataProvider + ?Sized,
{
    async fn fetch_demand(&self, item_id: &ItemId) -> PlanningResult<Vec<DemandRecord>> {
        (**self).fetch_demand(item_id).await
    }
}
