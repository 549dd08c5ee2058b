//! Tool listing: names, descriptions and JSON Schemas for the arguments.

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

pub const OPTIMIZE_SAFETY_STOCK: &str = "optimize_safety_stock";
pub const SIMULATE_LEAD_TIME: &str = "simulate_lead_time";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: JsonValue,
}

pub fn all() -> Vec<ToolDescriptor> {
    vec![optimize_safety_stock(), simulate_lead_time()]
}

fn optimize_safety_stock() -> ToolDescriptor {
    ToolDescriptor {
        name: OPTIMIZE_SAFETY_STOCK,
        description: "Calculate the safety stock for an item from its historical demand \
                      (fetched from the historical data API) and a target service level.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "item_id": {
                    "type": "string",
                    "description": "Unique identifier for the item"
                },
                "desired_service_level": {
                    "type": "number",
                    "minimum": 0.5,
                    "exclusiveMaximum": 1,
                    "description": "Target probability of not stocking out, e.g. 0.95"
                }
            },
            "required": ["item_id", "desired_service_level"]
        }),
    }
}

fn simulate_lead_time() -> ToolDescriptor {
    ToolDescriptor {
        name: SIMULATE_LEAD_TIME,
        description: "Project 30 days of inventory for an item under its average daily demand \
                      and average lead time.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "item_id": {
                    "type": "string",
                    "description": "Unique identifier for the item"
                },
                "lead_times": {
                    "type": "array",
                    "items": { "type": "integer", "minimum": 0 },
                    "minItems": 1,
                    "description": "Historical lead times in days"
                },
                "demand_data": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": {
                            "date": { "type": "string", "format": "date" },
                            "quantity": { "type": "number", "minimum": 0 }
                        },
                        "required": ["quantity"]
                    },
                    "description": "Daily demand records"
                }
            },
            "required": ["item_id", "lead_times", "demand_data"]
        }),
    }
}
