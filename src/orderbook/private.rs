use super::book::BookState;
use super::error::OrderBookError;
use super::order::{Order, OrderSide};
use super::side::SideIndex;
use super::snapshot::BookSummary;
use std::collections::HashMap;
use std::sync::Arc;

impl BookState {
    pub(super) fn new() -> Self {
        Self {
            bids: SideIndex::new(OrderSide::Bid),
            asks: SideIndex::new(OrderSide::Ask),
            orders: HashMap::new(),
        }
    }

    pub(super) fn side(&self, side: OrderSide) -> &SideIndex {
        match side {
            OrderSide::Bid => &self.bids,
            OrderSide::Ask => &self.asks,
        }
    }

    pub(super) fn side_mut(&mut self, side: OrderSide) -> &mut SideIndex {
        match side {
            OrderSide::Bid => &mut self.bids,
            OrderSide::Ask => &mut self.asks,
        }
    }

    /// Look up the resting order a cancel or update refers to
    pub(super) fn resting(&self, order_id: &str) -> Result<Arc<Order>, OrderBookError> {
        self.orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| OrderBookError::OrderNotFound(order_id.to_string()))
    }

    /// Cross-check a request against the order it targets. The price is only
    /// compared when `check_price` is set, since an update may move it.
    pub(super) fn verify_details(
        resting: &Order,
        request: &Order,
        check_price: bool,
    ) -> Result<(), OrderBookError> {
        if resting.side() != request.side() {
            return Err(OrderBookError::invalid(
                request.order_id(),
                "order_side",
                format!(
                    "is {} but the resting order is {}",
                    request.side(),
                    resting.side()
                ),
            ));
        }
        if check_price && resting.price() != request.price() {
            return Err(OrderBookError::invalid(
                request.order_id(),
                "price",
                format!(
                    "is {} but the resting order is at {}",
                    request.price(),
                    resting.price()
                ),
            ));
        }
        Ok(())
    }

    pub(super) fn summary(&self, order_book_id: &str) -> BookSummary {
        let bid_orders = self.bids.order_count();
        let ask_orders = self.asks.order_count();
        BookSummary {
            order_book_id: order_book_id.to_string(),
            total_orders: bid_orders + ask_orders,
            bid_orders,
            ask_orders,
            bid_levels: self.bids.level_count(),
            ask_levels: self.asks.level_count(),
            best_bid_price: self.bids.best_price().unwrap_or(0.0),
            best_ask_price: self.asks.best_price().unwrap_or(0.0),
        }
    }

    pub(super) fn check_consistency(&self) -> Result<(), String> {
        let mut indexed = 0;
        for index in [&self.bids, &self.asks] {
            for level in index.iter() {
                if level.is_empty() {
                    return Err(format!(
                        "empty {} level left at price {}",
                        index.side(),
                        level.price()
                    ));
                }
                for order in level.iter() {
                    indexed += 1;
                    if order.side() != index.side() || order.price() != level.price() {
                        return Err(format!(
                            "order {} filed under {} {} but is {} {}",
                            order.order_id(),
                            index.side(),
                            level.price(),
                            order.side(),
                            order.price()
                        ));
                    }
                    match self.orders.get(order.order_id()) {
                        Some(mapped) if **mapped == **order => {}
                        Some(_) => {
                            return Err(format!(
                                "order {} differs between index and id map",
                                order.order_id()
                            ));
                        }
                        None => {
                            return Err(format!(
                                "order {} is indexed but missing from the id map",
                                order.order_id()
                            ));
                        }
                    }
                }
            }
        }
        if indexed != self.orders.len() {
            return Err(format!(
                "{} orders indexed but {} in the id map",
                indexed,
                self.orders.len()
            ));
        }
        Ok(())
    }
}
