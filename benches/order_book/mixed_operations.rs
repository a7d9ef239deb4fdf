use super::new_order;
use criterion::Criterion;
use fifo_orderbook::{Order, OrderBook, OrderOperation, OrderSide};
use std::hint::black_box;

/// Register benchmarks for mixed/realistic order book operations
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    group.bench_function("realistic_feed_scenario", |b| {
        b.iter(|| {
            let order_book = OrderBook::new("TEST-SYMBOL");
            let mut resting: Vec<Order> = Vec::with_capacity(100);

            // Phase 1: build both sides of the book
            for i in 0..50 {
                let bid = new_order(990.0 + (i % 10) as f64, 10.0, OrderSide::Bid);
                let ask = new_order(1010.0 + (i % 10) as f64, 10.0, OrderSide::Ask);
                let _ = black_box(order_book.update_order_book(bid.clone()));
                let _ = black_box(order_book.update_order_book(ask.clone()));
                resting.push(bid);
                resting.push(ask);
            }

            // Phase 2: reprice a quarter of the book and read the top
            for order in resting.iter().step_by(4) {
                let update = Order::new(
                    2,
                    order.order_id(),
                    order.price() + 1.0,
                    order.initial_volume(),
                    order.current_volume(),
                    order.side(),
                    OrderOperation::Update,
                )
                .unwrap();
                let _ = black_box(order_book.update_order_book(update));
                black_box(order_book.best_bid_order());
                black_box(order_book.total_ask_volume_at_price_level(1));
            }

            // Phase 3: cancel every third order
            for order in resting.iter().step_by(3) {
                let _ = black_box(order_book.cancel_order(order.order_id()));
            }

            black_box(order_book.summary());
        })
    });

    group.finish();
}
