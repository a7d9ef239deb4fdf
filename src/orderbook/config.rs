//! Order book configuration

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};

/// Behavior switches for an [`OrderBook`](super::OrderBook).
///
/// The defaults reproduce the plain id-keyed behavior: cancels and updates
/// are matched by id alone and no state line is logged after mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookConfig {
    /// Reject cancels and updates whose side (and for cancels, price) does
    /// not match the resting order
    pub verify_cancel_details: bool,

    /// Emit the book state line after every accepted mutation
    pub log_state_after_mutation: bool,
}

impl OrderBookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verify_cancel_details(mut self, verify: bool) -> Self {
        self.verify_cancel_details = verify;
        self
    }

    pub fn with_log_state_after_mutation(mut self, log_state: bool) -> Self {
        self.log_state_after_mutation = log_state;
        self
    }

    /// Parse a configuration document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        serde_json::from_str(json).map_err(|e| OrderBookError::invalid("", "config", e.to_string()))
    }
}
