use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use invopt_core::{DemandRecord, ItemId, PlanningResult};
use invopt_planning::HistoricalDataProvider;

/// In-memory historical data for tests/dev.
///
/// Unknown items answer with an empty series, which the estimator reports as
/// `NoHistoricalData`. Writes replace a whole series at once, so a poisoned lock
/// never guards a half-written entry and both reads and writes recover from it.
#[derive(Debug, Default)]
pub struct InMemoryHistoricalData {
    inner: RwLock<HashMap<ItemId, Vec<DemandRecord>>>,
}

impl InMemoryHistoricalData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(self, item_id: ItemId, records: Vec<DemandRecord>) -> Self {
        self.insert(item_id, records);
        self
    }

    /// Replace the series stored for `item_id`.
    pub fn insert(&self, item_id: ItemId, records: Vec<DemandRecord>) {
        let mut map = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        map.insert(item_id, records);
    }
}

#[async_trait]
impl HistoricalDataProvider for InMemoryHistoricalData {
    async fn fetch_demand(&self, item_id: &ItemId) -> PlanningResult<Vec<DemandRecord>> {
        let map = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(map.get(item_id).cloned().unwrap_or_default())
    }
}
