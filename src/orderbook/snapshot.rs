//! Order book snapshot for market data

use super::order::Order;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A point-in-time view of one price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevelSnapshot {
    pub price: f64,

    /// Number of resting orders at this price
    pub order_count: usize,

    /// Sum of current volume at this price
    pub total_volume: f64,

    /// Resting orders in FIFO order
    pub orders: Vec<Order>,
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The identifier of the book the snapshot was taken from
    pub order_book_id: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid levels, best (highest) price first
    pub bids: Vec<PriceLevelSnapshot>,

    /// Ask levels, best (lowest) price first
    pub asks: Vec<PriceLevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and volume
    pub fn best_bid(&self) -> Option<(f64, f64)> {
        let bid = self
            .bids
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and volume
    pub fn best_ask(&self) -> Option<(f64, f64)> {
        let ask = self
            .asks
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some((bid_price + ask_price) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some(ask_price - bid_price),
            _ => None,
        }
    }

    /// Total volume across the captured bid levels
    pub fn total_bid_volume(&self) -> f64 {
        self.bids.iter().map(|level| level.total_volume).sum()
    }

    /// Total volume across the captured ask levels
    pub fn total_ask_volume(&self) -> f64 {
        self.asks.iter().map(|level| level.total_volume).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Top-of-book counts for the observability hook.
///
/// Best prices use 0 for an empty side, like the book's own queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub order_book_id: String,
    pub total_orders: usize,
    pub bid_orders: usize,
    pub ask_orders: usize,
    pub bid_levels: usize,
    pub ask_levels: usize,
    pub best_bid_price: f64,
    pub best_ask_price: f64,
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order Book State - ID: {}, Total Orders: {}, Bid Orders: {}, Ask Orders: {}, Best Bid: {:.2}, Best Ask: {:.2}",
            self.order_book_id,
            self.total_orders,
            self.bid_orders,
            self.ask_orders,
            self.best_bid_price,
            self.best_ask_price
        )
    }
}
