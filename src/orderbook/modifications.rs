//! Add, cancel and update handlers over the locked book state.
//!
//! Each handler checks everything that can fail before it touches the side
//! indexes or the id map, so a rejected request leaves no trace.

use super::book::BookState;
use super::config::OrderBookConfig;
use super::error::OrderBookError;
use super::order::Order;
use std::sync::Arc;
use tracing::trace;

impl BookState {
    /// Insert a new resting order. Rejects ids that are already resting.
    pub(super) fn add_order(&mut self, order: Order) -> Result<Arc<Order>, OrderBookError> {
        order.validate()?;
        if self.orders.contains_key(order.order_id()) {
            return Err(OrderBookError::invalid(
                order.order_id(),
                "order_id",
                "is already resting in the book",
            ));
        }
        Ok(self.insert_resting(order))
    }

    /// Remove the resting order with the request's id
    pub(super) fn cancel_order(
        &mut self,
        request: &Order,
        config: &OrderBookConfig,
    ) -> Result<Arc<Order>, OrderBookError> {
        request.validate()?;
        let resting = self.resting(request.order_id())?;
        if config.verify_cancel_details {
            Self::verify_details(&resting, request, true)?;
        }
        Ok(self.remove_resting(&resting))
    }

    /// Remove a resting order knowing only its id
    pub(super) fn cancel_order_by_id(
        &mut self,
        order_id: &str,
    ) -> Result<Arc<Order>, OrderBookError> {
        let resting = self.resting(order_id)?;
        Ok(self.remove_resting(&resting))
    }

    /// Cancel the resting order and add the new value under the same id.
    ///
    /// The replacement goes to the back of its price queue even when price
    /// and side are unchanged.
    pub(super) fn update_order(
        &mut self,
        order: Order,
        config: &OrderBookConfig,
    ) -> Result<Arc<Order>, OrderBookError> {
        order.validate()?;
        let resting = self.resting(order.order_id())?;
        if config.verify_cancel_details {
            Self::verify_details(&resting, &order, false)?;
        }
        self.remove_resting(&resting);
        Ok(self.insert_resting(order))
    }

    pub(super) fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.orders.clear();
    }

    fn insert_resting(&mut self, order: Order) -> Arc<Order> {
        let order = Arc::new(order);
        trace!(
            "Resting order {} {} {}@{}",
            order.order_id(),
            order.side(),
            order.current_volume(),
            order.price()
        );
        self.side_mut(order.side()).insert(Arc::clone(&order));
        self.orders
            .insert(order.order_id().to_string(), Arc::clone(&order));
        order
    }

    /// Drop `resting` from its level and from the id map. The stored price
    /// and side locate the level, whatever the request carried.
    fn remove_resting(&mut self, resting: &Arc<Order>) -> Arc<Order> {
        let id = resting.order_id();
        let removed = self
            .side_mut(resting.side())
            .remove(id, resting.price());
        debug_assert!(removed.is_some(), "order {id} missing from its level");
        self.orders.remove(id);
        trace!("Removed resting order {}", id);
        Arc::clone(resting)
    }
}
