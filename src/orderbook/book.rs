//! Core OrderBook implementation: shared state and the query surface

use super::config::OrderBookConfig;
use super::order::{Order, OrderSide};
use super::side::SideIndex;
use super::snapshot::{BookSummary, OrderBookSnapshot};
use crate::utils::current_time_millis;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, trace};

/// Everything the book mutates, guarded as one unit.
///
/// Both side indexes and the id map are only ever changed together while the
/// write lock is held, so a reader always sees them in lock-step.
#[derive(Debug)]
pub(super) struct BookState {
    /// Bid side levels, best (highest) price first
    pub(super) bids: SideIndex,

    /// Ask side levels, best (lowest) price first
    pub(super) asks: SideIndex,

    /// Every resting order on either side, keyed by id
    pub(super) orders: HashMap<String, Arc<Order>>,
}

/// The OrderBook records resting bid and ask orders for one instrument.
///
/// It is safe to share between threads. Mutations are serialized behind a
/// single exclusive lock; queries share a read lock, so every query answers
/// from one consistent point in time.
#[derive(Debug)]
pub struct OrderBook {
    /// Identifier of this book, usually the instrument symbol
    pub(super) order_book_id: String,

    pub(super) config: OrderBookConfig,

    pub(super) state: RwLock<BookState>,
}

impl OrderBook {
    /// Create a new, empty order book with the default configuration
    pub fn new(order_book_id: &str) -> Self {
        Self::with_config(order_book_id, OrderBookConfig::default())
    }

    /// Create a new, empty order book with an explicit configuration
    pub fn with_config(order_book_id: &str, config: OrderBookConfig) -> Self {
        info!(
            "Order book {} created with config {:?}",
            order_book_id, config
        );
        Self {
            order_book_id: order_book_id.to_string(),
            config,
            state: RwLock::new(BookState::new()),
        }
    }

    /// Get the id of this order book
    pub fn order_book_id(&self) -> &str {
        &self.order_book_id
    }

    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }

    /// Get a resting order by id
    pub fn get_order(&self, order_id: &str) -> Option<Arc<Order>> {
        let order = self.state.read().orders.get(order_id).cloned();
        trace!(
            "Order book {}: Retrieved order {} (found: {})",
            self.order_book_id,
            order_id,
            order.is_some()
        );
        order
    }

    /// Best price on `side`, or 0 when that side is empty
    pub fn best_price(&self, side: OrderSide) -> f64 {
        let price = self.state.read().side(side).best_price().unwrap_or(0.0);
        trace!(
            "Order book {}: Best {} price {}",
            self.order_book_id, side, price
        );
        price
    }

    /// Get the highest bid price, or 0 if there are no bids
    pub fn best_bid_price(&self) -> f64 {
        self.best_price(OrderSide::Bid)
    }

    /// Get the lowest ask price, or 0 if there are no asks
    pub fn best_ask_price(&self) -> f64 {
        self.best_price(OrderSide::Ask)
    }

    /// The order at the front of the queue at the best price on `side`
    pub fn best_order(&self, side: OrderSide) -> Option<Arc<Order>> {
        let order = self.state.read().side(side).best_order().cloned();
        trace!(
            "Order book {}: Best {} order {:?}",
            self.order_book_id,
            side,
            order.as_ref().map(|o| o.order_id())
        );
        order
    }

    pub fn best_bid_order(&self) -> Option<Arc<Order>> {
        self.best_order(OrderSide::Bid)
    }

    pub fn best_ask_order(&self) -> Option<Arc<Order>> {
        self.best_order(OrderSide::Ask)
    }

    /// Number of resting orders on `side`
    pub fn order_count(&self, side: OrderSide) -> usize {
        let count = self.state.read().side(side).order_count();
        trace!(
            "Order book {}: {} {} orders",
            self.order_book_id, count, side
        );
        count
    }

    pub fn total_number_of_bid_orders(&self) -> usize {
        self.order_count(OrderSide::Bid)
    }

    pub fn total_number_of_ask_orders(&self) -> usize {
        self.order_count(OrderSide::Ask)
    }

    /// Number of resting orders on both sides
    pub fn total_number_of_active_orders(&self) -> usize {
        let state = self.state.read();
        state.bids.order_count() + state.asks.order_count()
    }

    /// Sum of current volume on `side`
    pub fn volume(&self, side: OrderSide) -> f64 {
        let volume = self.state.read().side(side).total_volume();
        trace!(
            "Order book {}: Total {} volume {}",
            self.order_book_id, side, volume
        );
        volume
    }

    pub fn total_bid_volume(&self) -> f64 {
        self.volume(OrderSide::Bid)
    }

    pub fn total_ask_volume(&self) -> f64 {
        self.volume(OrderSide::Ask)
    }

    /// Sum of current volume on both sides
    pub fn total_order_volume(&self) -> f64 {
        let state = self.state.read();
        state.bids.total_volume() + state.asks.total_volume()
    }

    /// Volume resting at the `level`-th best price on `side`.
    ///
    /// Levels are 1-indexed; anything out of range yields 0.
    pub fn volume_at_price_level(&self, side: OrderSide, level: i64) -> f64 {
        let volume = self
            .state
            .read()
            .side(side)
            .level_at_rank(level)
            .map_or(0.0, |l| l.total_volume());
        trace!(
            "Order book {}: {} volume at level {}: {}",
            self.order_book_id, side, level, volume
        );
        volume
    }

    pub fn total_bid_volume_at_price_level(&self, level: i64) -> f64 {
        self.volume_at_price_level(OrderSide::Bid, level)
    }

    pub fn total_ask_volume_at_price_level(&self, level: i64) -> f64 {
        self.volume_at_price_level(OrderSide::Ask, level)
    }

    /// Bid plus ask volume at the `level`-th best price of each side
    pub fn total_volume_at_price_level(&self, level: i64) -> f64 {
        let state = self.state.read();
        [&state.bids, &state.asks]
            .iter()
            .filter_map(|side| side.level_at_rank(level))
            .map(|l| l.total_volume())
            .sum()
    }

    /// Price of the `level`-th best level on `side`, or 0 when out of range
    pub fn price_at_price_level(&self, side: OrderSide, level: i64) -> f64 {
        let price = self
            .state
            .read()
            .side(side)
            .level_at_rank(level)
            .map_or(0.0, |l| l.price());
        trace!(
            "Order book {}: {} price at level {}: {}",
            self.order_book_id, side, level, price
        );
        price
    }

    pub fn bid_price_at_price_level(&self, level: i64) -> f64 {
        self.price_at_price_level(OrderSide::Bid, level)
    }

    pub fn ask_price_at_price_level(&self, level: i64) -> f64 {
        self.price_at_price_level(OrderSide::Ask, level)
    }

    /// Number of distinct occupied prices on `side`
    pub fn price_level_count(&self, side: OrderSide) -> usize {
        self.state.read().side(side).level_count()
    }

    pub fn total_number_of_bid_price_levels(&self) -> usize {
        self.price_level_count(OrderSide::Bid)
    }

    pub fn total_number_of_ask_price_levels(&self) -> usize {
        self.price_level_count(OrderSide::Ask)
    }

    pub fn total_number_of_price_levels(&self) -> usize {
        let state = self.state.read();
        state.bids.level_count() + state.asks.level_count()
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        let state = self.state.read();
        match (state.bids.best_price(), state.asks.best_price()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        let state = self.state.read();
        match (state.bids.best_price(), state.asks.best_price()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// True when neither side holds an order
    pub fn is_empty(&self) -> bool {
        self.state.read().orders.is_empty()
    }

    /// Get all orders at a specific price, in FIFO order
    pub fn get_orders_at_price(&self, price: f64, side: OrderSide) -> Vec<Arc<Order>> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.order_book_id, price, side
        );
        self.state
            .read()
            .side(side)
            .level(price)
            .map(|level| level.iter_orders())
            .unwrap_or_default()
    }

    /// Get all orders in the book: bids best first, then asks best first
    pub fn get_all_orders(&self) -> Vec<Arc<Order>> {
        trace!("Order book {}: Getting all orders", self.order_book_id);
        let state = self.state.read();
        state
            .bids
            .iter()
            .chain(state.asks.iter())
            .flat_map(|level| level.iter().cloned())
            .collect()
    }

    /// Ranked `(price, volume)` pairs for bids and asks
    pub fn get_volume_by_price(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let state = self.state.read();
        let collect = |side: &SideIndex| {
            side.iter()
                .map(|level| (level.price(), level.total_volume()))
                .collect::<Vec<_>>()
        };
        (collect(&state.bids), collect(&state.asks))
    }

    /// Create a snapshot of the best `depth` levels per side
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let state = self.state.read();
        OrderBookSnapshot {
            order_book_id: self.order_book_id.clone(),
            timestamp: current_time_millis(),
            bids: state.bids.iter().take(depth).map(|l| l.snapshot()).collect(),
            asks: state.asks.iter().take(depth).map(|l| l.snapshot()).collect(),
        }
    }

    /// Counts and best prices read under a single lock acquisition
    pub fn summary(&self) -> BookSummary {
        self.state.read().summary(&self.order_book_id)
    }

    /// Log the current state of the order book
    pub fn log_order_book_state(&self) -> BookSummary {
        let summary = self.summary();
        info!("{}", summary);
        summary
    }

    /// Verify that the side indexes and the id map agree with each other
    pub fn check_consistency(&self) -> Result<(), String> {
        self.state.read().check_consistency()
    }
}
