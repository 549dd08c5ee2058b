use std::sync::Arc;

use invopt_infra::histdata::{FetchError, HttpHistoricalData};
use invopt_planning::HistoricalDataProvider;

use crate::config::ServiceConfig;
use crate::tools::ToolRegistry;

/// Shared per-process services handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    registry: ToolRegistry,
}

impl AppServices {
    pub fn new(provider: Arc<dyn HistoricalDataProvider>) -> Self {
        Self {
            registry: ToolRegistry::new(provider),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

/// Production wiring: historical data over HTTP.
pub fn build_services(config: &ServiceConfig) -> Result<AppServices, FetchError> {
    let provider = HttpHistoricalData::new(config.histdata.clone())?;
    tracing::info!(base_url = %config.histdata.base_url, "historical data provider configured");
    Ok(AppServices::new(Arc::new(provider)))
}
