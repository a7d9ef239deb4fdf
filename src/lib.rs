//! # Thread-Safe FIFO Limit Order Book
//!
//! An in-memory limit order book for a single instrument. It records resting
//! buy (bid) and sell (ask) interest and answers point-in-time queries about
//! it: best prices, top-of-book orders, depth by price level, order counts
//! and volumes. It is meant for analytics and surveillance consumers; there
//! is no matching, no crossing logic and no persistence.
//!
//! ## Key Features
//!
//! - **Price-Time Ordering**: bids are ranked highest price first, asks
//!   lowest price first, and orders at one price keep their arrival order.
//!
//! - **Single Mutation Entry Point**: every change arrives as an [`Order`]
//!   tagged with [`OrderOperation::Add`], [`OrderOperation::Update`] or
//!   [`OrderOperation::Cancel`] and goes through
//!   [`OrderBook::update_order_book`].
//!
//! - **Update as Cancel-then-Add**: an update always re-queues the order at
//!   the back of its price level, even when only the volume changed.
//!
//! - **Typed Rejections**: invalid requests, unknown ids and unsupported
//!   operation tags come back as [`OrderBookError`] and leave the book
//!   untouched.
//!
//! - **Concurrent Reads**: the book is `Send + Sync`. Mutations are
//!   serialized behind one exclusive lock while queries share a read lock,
//!   so each query sees one consistent state.
//!
//! ## Price Levels
//!
//! Level queries are 1-indexed over each side's ranking, so level 1 is
//! always the best price. Out-of-range levels (0, negative, or past the
//! last occupied price) read as 0, and so do best prices on an empty side.
//!
//! ## Example
//!
//! ```rust
//! use fifo_orderbook::{Order, OrderBook, OrderOperation, OrderSide};
//!
//! let book = OrderBook::new("XYZ");
//!
//! let bid = Order::new(1, "1", 100.0, 10.0, 10.0, OrderSide::Bid, OrderOperation::Add).unwrap();
//! let ask = Order::new(2, "2", 101.0, 5.0, 5.0, OrderSide::Ask, OrderOperation::Add).unwrap();
//! book.update_order_book(bid).unwrap();
//! book.update_order_book(ask).unwrap();
//!
//! assert_eq!(book.best_bid_price(), 100.0);
//! assert_eq!(book.best_ask_price(), 101.0);
//! assert_eq!(book.total_number_of_active_orders(), 2);
//! assert_eq!(book.spread(), Some(1.0));
//!
//! let cancel = Order::new(3, "1", 100.0, 10.0, 10.0, OrderSide::Bid, OrderOperation::Cancel).unwrap();
//! book.update_order_book(cancel).unwrap();
//! assert_eq!(book.best_bid_price(), 0.0);
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing`. Call [`setup_logger`] to install a
//! formatting subscriber whose level is read from the `LOGLEVEL`
//! environment variable.

pub mod orderbook;

mod utils;

pub use orderbook::{
    BookSummary, ErrorKind, Order, OrderBook, OrderBookConfig, OrderBookError, OrderBookSnapshot,
    OrderMessage, OrderOperation, OrderSide, PriceLevel, PriceLevelSnapshot, SideIndex,
};
pub use utils::{current_time_millis, setup_logger};
