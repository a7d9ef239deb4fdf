use super::new_order;
use criterion::{BenchmarkId, Criterion};
use fifo_orderbook::{OrderBook, OrderSide};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    group.bench_function("add_orders_distinct_prices", |b| {
        b.iter(|| {
            let order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100 {
                let order = new_order(1000.0 + i as f64, 10.0, OrderSide::Bid);
                let _ = black_box(order_book.update_order_book(order));
            }
        })
    });

    group.bench_function("add_orders_both_sides", |b| {
        b.iter(|| {
            let order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100 {
                let side = if i % 2 == 0 { OrderSide::Bid } else { OrderSide::Ask };
                let price = match side {
                    OrderSide::Bid => 990.0 - (i % 20) as f64,
                    OrderSide::Ask => 1010.0 + (i % 20) as f64,
                };
                let _ = black_box(order_book.update_order_book(new_order(price, 10.0, side)));
            }
        })
    });

    // Orders stacking up in a single FIFO level
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("single_level_depth", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let order_book = OrderBook::new("TEST-SYMBOL");
                    for _ in 0..order_count {
                        let order = new_order(1000.0, 10.0, OrderSide::Bid);
                        let _ = black_box(order_book.update_order_book(order));
                    }
                })
            },
        );
    }

    group.finish();
}
