use fifo_orderbook::{Order, OrderBook, OrderOperation, OrderSide};
use uuid::Uuid;

pub mod add_orders;
pub mod mixed_operations;
pub mod queries;

pub fn register_benchmarks(c: &mut criterion::Criterion) {
    add_orders::register_benchmarks(c);
    update_orders::register_benchmarks(c);
    queries::register_benchmarks(c);
    mixed_operations::register_benchmarks(c);
}

/// Build a request with a fresh uuid id
pub fn new_order(price: f64, volume: f64, side: OrderSide) -> Order {
    Order::new(
        1,
        Uuid::new_v4().to_string(),
        price,
        volume,
        volume,
        side,
        OrderOperation::Add,
    )
    .unwrap()
}

/// A book with `count` orders spread over ten levels per side
pub fn setup_order_book_with_orders(count: usize) -> (OrderBook, Vec<Order>) {
    let order_book = OrderBook::new("TEST-SYMBOL");
    let mut orders = Vec::with_capacity(count);
    for i in 0..count {
        let (side, price) = if i % 2 == 0 {
            (OrderSide::Bid, 990.0 + (i % 10) as f64)
        } else {
            (OrderSide::Ask, 1010.0 + (i % 10) as f64)
        };
        let order = new_order(price, 10.0, side);
        order_book.update_order_book(order.clone()).unwrap();
        orders.push(order);
    }
    (order_book, orders)
}
