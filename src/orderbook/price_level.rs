//! FIFO queue of resting orders sharing one price on one side

use super::order::Order;
use super::snapshot::PriceLevelSnapshot;
use std::collections::VecDeque;
use std::sync::Arc;

/// All orders resting at a single price.
///
/// Orders are kept in arrival order: new orders are appended at the back and
/// the front is the order with time priority. Removal by id scans the queue,
/// which stays cheap because per-price depth is small compared to the book.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: f64,
    orders: VecDeque<Arc<Order>>,
}

impl PriceLevel {
    /// Create an empty level for `price`
    pub fn new(price: f64) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Append an order at the back of the queue
    pub fn push_back(&mut self, order: Arc<Order>) {
        debug_assert_eq!(order.price(), self.price);
        self.orders.push_back(order);
    }

    /// Remove the order with `order_id`, keeping the relative order of the rest
    pub fn remove(&mut self, order_id: &str) -> Option<Arc<Order>> {
        let position = self
            .orders
            .iter()
            .position(|order| order.order_id() == order_id)?;
        self.orders.remove(position)
    }

    /// The order with time priority at this price
    pub fn front(&self) -> Option<&Arc<Order>> {
        self.orders.front()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of the current volume of every order at this level
    pub fn total_volume(&self) -> f64 {
        self.orders.iter().map(|order| order.current_volume()).sum()
    }

    /// Orders in FIFO order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Order>> {
        self.orders.iter()
    }

    /// Owned copy of the queue in FIFO order
    pub fn iter_orders(&self) -> Vec<Arc<Order>> {
        self.orders.iter().cloned().collect()
    }

    /// Point-in-time view of this level
    pub fn snapshot(&self) -> PriceLevelSnapshot {
        PriceLevelSnapshot {
            price: self.price,
            order_count: self.order_count(),
            total_volume: self.total_volume(),
            orders: self.orders.iter().map(|order| (**order).clone()).collect(),
        }
    }
}
