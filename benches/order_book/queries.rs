use super::setup_order_book_with_orders;
use criterion::Criterion;
use std::hint::black_box;

/// Register benchmarks for the read-side queries
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Queries");
    let (order_book, orders) = setup_order_book_with_orders(1000);

    group.bench_function("best_prices", |b| {
        b.iter(|| {
            black_box(order_book.best_bid_price());
            black_box(order_book.best_ask_price());
        })
    });

    group.bench_function("best_orders", |b| {
        b.iter(|| {
            black_box(order_book.best_bid_order());
            black_box(order_book.best_ask_order());
        })
    });

    group.bench_function("volume_at_levels", |b| {
        b.iter(|| {
            for level in 1..=10 {
                black_box(order_book.total_volume_at_price_level(level));
            }
        })
    });

    group.bench_function("totals", |b| {
        b.iter(|| {
            black_box(order_book.total_number_of_active_orders());
            black_box(order_book.total_order_volume());
        })
    });

    group.bench_function("get_order", |b| {
        b.iter(|| {
            for order in orders.iter().step_by(50) {
                black_box(order_book.get_order(order.order_id()));
            }
        })
    });

    group.bench_function("create_snapshot", |b| {
        b.iter(|| black_box(order_book.create_snapshot(5)))
    });

    group.finish();
}
