//! Price-ordered index of the levels on one side of the book

use super::order::{Order, OrderSide};
use super::price_level::PriceLevel;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Map key whose ordering puts the best price first for its side:
/// descending for bids, ascending for asks.
///
/// All keys inside one index carry the same side, so the comparison is a
/// total order over that map.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LevelKey {
    price: OrderedFloat<f64>,
    side: OrderSide,
}

impl LevelKey {
    pub(crate) fn new(price: f64, side: OrderSide) -> Self {
        Self {
            price: OrderedFloat(price),
            side,
        }
    }
}

impl Ord for LevelKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let ascending = self.price.cmp(&other.price);
        match self.side {
            OrderSide::Bid => ascending.reverse(),
            OrderSide::Ask => ascending,
        }
    }
}

impl PartialOrd for LevelKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LevelKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LevelKey {}

/// The price levels of one side, iterated best price first.
///
/// Rank 1 is the best price. Levels never stay empty: removing the last
/// order at a price drops the level.
#[derive(Debug, Clone)]
pub struct SideIndex {
    side: OrderSide,
    levels: BTreeMap<LevelKey, PriceLevel>,
}

impl SideIndex {
    pub fn new(side: OrderSide) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Append `order` to the back of the queue at its price, creating the
    /// level if needed
    pub fn insert(&mut self, order: Arc<Order>) {
        debug_assert_eq!(order.side(), self.side);
        let price = order.price();
        self.levels
            .entry(LevelKey::new(price, self.side))
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(order);
    }

    /// Remove `order_id` from the level at `price`. The level is dropped when
    /// it becomes empty.
    pub fn remove(&mut self, order_id: &str, price: f64) -> Option<Arc<Order>> {
        let key = LevelKey::new(price, self.side);
        let level = self.levels.get_mut(&key)?;
        let removed = level.remove(order_id)?;
        if level.is_empty() {
            self.levels.remove(&key);
        }
        Some(removed)
    }

    /// Level at an exact price
    pub fn level(&self, price: f64) -> Option<&PriceLevel> {
        self.levels.get(&LevelKey::new(price, self.side))
    }

    /// The rank-1 level
    pub fn best_level(&self) -> Option<&PriceLevel> {
        self.levels.values().next()
    }

    pub fn best_price(&self) -> Option<f64> {
        self.best_level().map(PriceLevel::price)
    }

    /// The order with time priority at the best price
    pub fn best_order(&self) -> Option<&Arc<Order>> {
        self.best_level().and_then(PriceLevel::front)
    }

    /// The level at 1-indexed `rank`; `None` when `rank` is out of range
    pub fn level_at_rank(&self, rank: i64) -> Option<&PriceLevel> {
        if rank <= 0 {
            return None;
        }
        let index = usize::try_from(rank - 1).ok()?;
        self.levels.values().nth(index)
    }

    /// Number of distinct occupied prices
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of resting orders across all levels
    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::order_count).sum()
    }

    /// Sum of current volume across all levels
    pub fn total_volume(&self) -> f64 {
        self.levels.values().map(PriceLevel::total_volume).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels best price first
    pub fn iter(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
