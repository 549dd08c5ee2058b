//! Historical demand providers.
//!
//! - `http`: the production client for the `/histdata/{item_id}` endpoint
//! - `in_memory`: fixed series for tests/dev

pub mod http;
pub mod in_memory;

pub use http::{FetchError, HttpHistoricalData, HttpHistoricalDataConfig};
pub use in_memory::InMemoryHistoricalData;
