//! Tool registry: decode a named call, run the matching component, shape the result.
//!
//! Every call gets a UUIDv7 `call_id` and runs inside its own `tool_call` span.
//! Calls run on a spawned task so a panic inside a component is reported as an
//! `internal_error` payload. The task is aborted if the caller stops waiting.

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use invopt_core::PlanningError;
use invopt_planning::{HistoricalDataProvider, estimate_safety_stock, simulate_lead_time};

pub mod args;
pub mod descriptors;

pub use descriptors::{OPTIMIZE_SAFETY_STOCK, SIMULATE_LEAD_TIME, ToolDescriptor};

/// A request naming one tool plus its argument object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: JsonValue,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: JsonValue) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Planning(#[from] PlanningError),
}

impl ToolError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::Planning(e) => e.kind(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::UnknownTool(_) => self.to_string(),
            Self::Planning(e) => e.detail().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolErrorBody {
    pub kind: String,
    pub message: String,
}

/// Structured outcome of one tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResponse {
    Ok {
        tool: String,
        call_id: Uuid,
        result: JsonValue,
    },
    Error {
        tool: String,
        call_id: Uuid,
        error: ToolErrorBody,
    },
}

impl ToolResponse {
    fn from_outcome(tool: String, call_id: Uuid, outcome: Result<JsonValue, ToolError>) -> Self {
        match outcome {
            Ok(result) => Self::Ok {
                tool,
                call_id,
                result,
            },
            Err(e) => Self::Error {
                tool,
                call_id,
                error: ToolErrorBody {
                    kind: e.kind().to_string(),
                    message: e.message(),
                },
            },
        }
    }

    /// Error kind, if this is an error response.
    pub fn error_kind(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Error { error, .. } => Some(&error.kind),
        }
    }
}

/// Aborts the wrapped task when dropped.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Dispatches tool calls to the planning components.
#[derive(Clone)]
pub struct ToolRegistry {
    provider: Arc<dyn HistoricalDataProvider>,
}

impl ToolRegistry {
    pub fn new(provider: Arc<dyn HistoricalDataProvider>) -> Self {
        Self { provider }
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        descriptors::all()
    }

    pub async fn call(&self, call: ToolCall) -> ToolResponse {
        let call_id = Uuid::now_v7();
        let span = info_span!("tool_call", tool = %call.name, %call_id);
        let ToolCall { name, arguments } = call;

        let registry = self.clone();
        let tool = name.clone();
        let mut task = AbortOnDrop(tokio::spawn(
            async move { registry.dispatch(&tool, arguments).await }.instrument(span.clone()),
        ));

        let outcome = match (&mut task.0).await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                let _guard = span.enter();
                warn!(error = %join_err, "tool call aborted");
                Err(PlanningError::internal("tool call failed unexpectedly").into())
            }
        };

        {
            let _guard = span.enter();
            match &outcome {
                Ok(_) => info!("tool call succeeded"),
                Err(e) => warn!(kind = e.kind(), error = %e, "tool call failed"),
            }
        }

        ToolResponse::from_outcome(name, call_id, outcome)
    }

    async fn dispatch(&self, name: &str, arguments: JsonValue) -> Result<JsonValue, ToolError> {
        match name {
            OPTIMIZE_SAFETY_STOCK => {
                let args: args::OptimizeSafetyStockArgs = decode_args(name, arguments)?;
                let result =
                    estimate_safety_stock(self.provider.as_ref(), &args.item_id, args.desired_service_level)
                        .await?;
                encode_result(&result)
            }
            SIMULATE_LEAD_TIME => {
                let args: args::SimulateLeadTimeArgs = decode_args(name, arguments)?;
                let result = simulate_lead_time(&args.item_id, &args.lead_times, &args.demand_data)?;
                encode_result(&result)
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn decode_args<T: DeserializeOwned>(tool: &str, arguments: JsonValue) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| {
        PlanningError::invalid_parameter(format!("invalid arguments for {tool}: {e}")).into()
    })
}

/// Results carry no nullable fields, so a `null` in the encoded value can only be
/// a non-finite float that `serde_json` silently mapped to `null`.
fn encode_result<T: Serialize>(result: &T) -> Result<JsonValue, ToolError> {
    let value = serde_json::to_value(result)
        .map_err(|e| PlanningError::internal(format!("failed to encode result: {e}")))?;
    if contains_null(&value) {
        return Err(PlanningError::internal("result contains a non-finite number").into());
    }
    Ok(value)
}

fn contains_null(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Array(items) => items.iter().any(contains_null),
        JsonValue::Object(fields) => fields.values().any(contains_null),
        _ => false,
    }
}
