//! OrderBook implementation for recording resting orders and answering depth queries.

pub mod book;
mod config;
mod error;
mod modifications;
mod operations;
mod order;
mod price_level;
mod private;
mod side;
mod snapshot;

pub use book::OrderBook;
pub use config::OrderBookConfig;
pub use error::{ErrorKind, OrderBookError};
pub use order::{Order, OrderMessage, OrderOperation, OrderSide};
pub use price_level::PriceLevel;
pub use side::SideIndex;
pub use snapshot::{BookSummary, OrderBookSnapshot, PriceLevelSnapshot};
