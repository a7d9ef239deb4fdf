//! Order book mutations: the single entry point and its convenience forms

use super::book::{BookState, OrderBook};
use super::error::OrderBookError;
use super::order::{Order, OrderMessage, OrderOperation};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

impl OrderBook {
    /// Apply one add, update or cancel request.
    ///
    /// The whole request, including the cancel-then-add of an update, runs
    /// under the exclusive lock. On success returns the resting order (add,
    /// update) or the removed order (cancel). On failure nothing changed.
    pub fn update_order_book(&self, order: Order) -> Result<Arc<Order>, OrderBookError> {
        trace!("Order book {}: Processing {}", self.order_book_id, order);
        let operation = order.operation();
        let order_id = order.order_id().to_string();

        let mut state = self.state.write();
        let result = match operation {
            OrderOperation::Add => state.add_order(order),
            OrderOperation::Update => state.update_order(order, &self.config),
            OrderOperation::Cancel => state.cancel_order(&order, &self.config),
        };

        self.log_outcome(&state, operation, &order_id, &result);
        result
    }

    /// Validate a raw message and apply it
    pub fn process_message(&self, message: OrderMessage) -> Result<Arc<Order>, OrderBookError> {
        let order = Order::try_from(message).inspect_err(|err| {
            warn!(
                "Order book {}: Rejected message: {}",
                self.order_book_id, err
            );
        })?;
        self.update_order_book(order)
    }

    /// Decode a JSON message and apply it
    pub fn update_order_book_json(&self, json: &str) -> Result<Arc<Order>, OrderBookError> {
        let message = OrderMessage::from_json(json).inspect_err(|err| {
            warn!(
                "Order book {}: Rejected message: {}",
                self.order_book_id, err
            );
        })?;
        self.process_message(message)
    }

    /// Add a new order, whatever operation tag it carries
    pub fn add_order(&self, order: Order) -> Result<Arc<Order>, OrderBookError> {
        self.update_order_book(order.with_operation(OrderOperation::Add))
    }

    /// Replace the resting order with the same id
    pub fn update_order(&self, order: Order) -> Result<Arc<Order>, OrderBookError> {
        self.update_order_book(order.with_operation(OrderOperation::Update))
    }

    /// Cancel an order by ID
    pub fn cancel_order(&self, order_id: &str) -> Result<Arc<Order>, OrderBookError> {
        let mut state = self.state.write();
        let result = state.cancel_order_by_id(order_id);
        self.log_outcome(&state, OrderOperation::Cancel, order_id, &result);
        result
    }

    /// Drop every resting order
    pub fn clear(&self) {
        self.state.write().clear();
        info!("Order book {}: Cleared", self.order_book_id);
    }

    fn log_outcome(
        &self,
        state: &BookState,
        operation: OrderOperation,
        order_id: &str,
        result: &Result<Arc<Order>, OrderBookError>,
    ) {
        match result {
            Ok(_) => {
                debug!(
                    "Order book {}: {} accepted for order {}",
                    self.order_book_id, operation, order_id
                );
                if self.config.log_state_after_mutation {
                    info!("{}", state.summary(&self.order_book_id));
                }
            }
            Err(err) => {
                warn!(
                    "Order book {}: {} rejected for order {}: {}",
                    self.order_book_id, operation, order_id, err
                );
            }
        }
    }
}
