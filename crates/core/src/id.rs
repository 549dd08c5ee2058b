//! Strongly-typed item identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::PlanningError;

/// Longest identifier accepted from callers.
pub const MAX_ITEM_ID_LEN: usize = 128;

/// Unique key of a stocked item (SKU, part number, ...).
///
/// Opaque to the planning layer; the only rules are that it is non-blank,
/// bounded in length and free of control characters. Surrounding whitespace is
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: &str) -> Result<Self, PlanningError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlanningError::invalid_parameter("item_id must not be empty"));
        }
        if trimmed.len() > MAX_ITEM_ID_LEN {
            return Err(PlanningError::invalid_parameter(format!(
                "item_id must be at most {MAX_ITEM_ID_LEN} bytes"
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(PlanningError::invalid_parameter(
                "item_id must not contain control characters",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = PlanningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}
