//! Order values, side and operation tags, and the raw inbound message shape

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the book an order rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy interest
    Bid,
    /// Sell interest
    Ask,
}

impl OrderSide {
    /// The other side of the book
    pub fn opposite(self) -> Self {
        match self {
            OrderSide::Bid => OrderSide::Ask,
            OrderSide::Ask => OrderSide::Bid,
        }
    }

    fn parse(value: &str, order_id: &str) -> Result<Self, OrderBookError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bid" => Ok(OrderSide::Bid),
            "ask" => Ok(OrderSide::Ask),
            other => Err(OrderBookError::invalid(
                order_id,
                "order_side",
                format!("'{other}' is not a known side"),
            )),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Bid => write!(f, "bid"),
            OrderSide::Ask => write!(f, "ask"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderSide::parse(s, "")
    }
}

/// The mutation a request asks the book to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderOperation {
    /// Insert a new resting order
    Add,
    /// Replace a resting order, losing its queue position
    Update,
    /// Remove a resting order
    Cancel,
}

impl fmt::Display for OrderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderOperation::Add => write!(f, "add"),
            OrderOperation::Update => write!(f, "update"),
            OrderOperation::Cancel => write!(f, "cancel"),
        }
    }
}

impl FromStr for OrderOperation {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(OrderOperation::Add),
            "update" => Ok(OrderOperation::Update),
            "cancel" => Ok(OrderOperation::Cancel),
            _ => Err(OrderBookError::UnsupportedOperation(s.to_string())),
        }
    }
}

/// An immutable snapshot of one order.
///
/// The operation tag describes the request that carried the order; the book
/// stores resting orders exactly as they were accepted. Construction always
/// validates, and deserialization goes through [`OrderMessage`] so a decoded
/// `Order` is valid too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderMessage")]
pub struct Order {
    timestamp_ms: u64,
    order_id: String,
    price: f64,
    initial_volume: f64,
    current_volume: f64,
    order_side: OrderSide,
    order_operation: OrderOperation,
}

impl Order {
    /// Create a validated order.
    ///
    /// Fails with [`OrderBookError::InvalidArgument`] naming the first field
    /// that violates its rule.
    pub fn new(
        timestamp_ms: u64,
        order_id: impl Into<String>,
        price: f64,
        initial_volume: f64,
        current_volume: f64,
        order_side: OrderSide,
        order_operation: OrderOperation,
    ) -> Result<Self, OrderBookError> {
        let order = Self {
            timestamp_ms,
            order_id: order_id.into(),
            price,
            initial_volume,
            current_volume,
            order_side,
            order_operation,
        };
        order.validate()?;
        Ok(order)
    }

    /// Check every field against its rule
    pub fn validate(&self) -> Result<(), OrderBookError> {
        let id = self.order_id.as_str();
        if id.trim().is_empty() {
            return Err(OrderBookError::invalid(id, "order_id", "must not be empty"));
        }
        if self.timestamp_ms == 0 {
            return Err(OrderBookError::invalid(id, "timestamp_ms", "must be positive"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(OrderBookError::invalid(
                id,
                "price",
                format!("must be a finite value greater than zero, got {}", self.price),
            ));
        }
        if !self.initial_volume.is_finite() || self.initial_volume <= 0.0 {
            return Err(OrderBookError::invalid(
                id,
                "initial_volume",
                format!(
                    "must be a finite value greater than zero, got {}",
                    self.initial_volume
                ),
            ));
        }
        if !self.current_volume.is_finite() || self.current_volume < 0.0 {
            return Err(OrderBookError::invalid(
                id,
                "current_volume",
                format!("must be a finite non-negative value, got {}", self.current_volume),
            ));
        }
        Ok(())
    }

    /// Arrival time in milliseconds
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// Order id, unique among resting orders
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Volume at first insertion
    pub fn initial_volume(&self) -> f64 {
        self.initial_volume
    }

    /// Volume currently resting
    pub fn current_volume(&self) -> f64 {
        self.current_volume
    }

    pub fn side(&self) -> OrderSide {
        self.order_side
    }

    pub fn operation(&self) -> OrderOperation {
        self.order_operation
    }

    /// Copy of this order carrying a different operation tag
    pub fn with_operation(&self, operation: OrderOperation) -> Self {
        Self {
            order_operation: operation,
            ..self.clone()
        }
    }

    /// One-line description used by the logging hooks
    pub fn details(&self) -> String {
        format!(
            "Order Details - ID: {}, Price: {:.2}, Initial Volume: {:.2}, Current Volume: {:.2}, Side: {}, Operation: {}",
            self.order_id,
            self.price,
            self.initial_volume,
            self.current_volume,
            self.order_side,
            self.order_operation
        )
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}@{} (initial {}, t={})",
            self.order_operation,
            self.order_side,
            self.order_id,
            self.current_volume,
            self.price,
            self.initial_volume,
            self.timestamp_ms
        )
    }
}

/// Raw, unvalidated mutation request as it arrives from a feed adapter.
///
/// Every field is optional so that absent values surface as
/// [`OrderBookError::InvalidArgument`] instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderMessage {
    pub timestamp_ms: Option<u64>,
    pub order_id: Option<String>,
    pub price: Option<f64>,
    pub initial_volume: Option<f64>,
    pub current_volume: Option<f64>,
    pub order_side: Option<String>,
    pub order_operation: Option<String>,
}

impl OrderMessage {
    /// Decode a message from JSON. The `null` document counts as an absent
    /// request and is rejected.
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        let decoded: Option<OrderMessage> = serde_json::from_str(json)
            .map_err(|e| OrderBookError::invalid("", "message", e.to_string()))?;
        decoded.ok_or_else(|| OrderBookError::invalid("", "message", "request is absent"))
    }
}

impl From<&Order> for OrderMessage {
    fn from(order: &Order) -> Self {
        Self {
            timestamp_ms: Some(order.timestamp_ms),
            order_id: Some(order.order_id.clone()),
            price: Some(order.price),
            initial_volume: Some(order.initial_volume),
            current_volume: Some(order.current_volume),
            order_side: Some(order.order_side.to_string()),
            order_operation: Some(order.order_operation.to_string()),
        }
    }
}

impl TryFrom<OrderMessage> for Order {
    type Error = OrderBookError;

    fn try_from(message: OrderMessage) -> Result<Self, Self::Error> {
        let order_id = message
            .order_id
            .ok_or_else(|| OrderBookError::invalid("", "order_id", "is missing"))?;

        let order_operation = match message.order_operation.as_deref() {
            Some(tag) => tag.parse::<OrderOperation>()?,
            None => return Err(OrderBookError::invalid(&order_id, "order_operation", "is missing")),
        };
        let order_side = match message.order_side.as_deref() {
            Some(side) => OrderSide::parse(side, &order_id)?,
            None => return Err(OrderBookError::invalid(&order_id, "order_side", "is missing")),
        };

        let timestamp_ms = message
            .timestamp_ms
            .ok_or_else(|| OrderBookError::invalid(&order_id, "timestamp_ms", "is missing"))?;
        let price = message
            .price
            .ok_or_else(|| OrderBookError::invalid(&order_id, "price", "is missing"))?;
        let initial_volume = message
            .initial_volume
            .ok_or_else(|| OrderBookError::invalid(&order_id, "initial_volume", "is missing"))?;
        let current_volume = message
            .current_volume
            .ok_or_else(|| OrderBookError::invalid(&order_id, "current_volume", "is missing"))?;

        Order::new(
            timestamp_ms,
            order_id,
            price,
            initial_volume,
            current_volume,
            order_side,
            order_operation,
        )
    }
}
