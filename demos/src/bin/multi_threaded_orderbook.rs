use fifo_orderbook::{Order, OrderBook, OrderOperation, OrderSide, setup_logger};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;
use uuid::Uuid;

// Number of threads to use for the test
const THREAD_COUNT: usize = 8;
// Duration of the test in seconds
const TEST_DURATION_SECS: u64 = 5;

fn main() {
    setup_logger();
    info!("Multi-threaded OrderBook Performance Test");
    info!("----------------------------------------");
    info!("Threads: {}", THREAD_COUNT);
    info!("Duration: {} seconds", TEST_DURATION_SECS);

    run_performance_test();
}

fn new_request(price: f64, side: OrderSide) -> Option<Order> {
    Order::new(
        1,
        Uuid::new_v4().to_string(),
        price,
        10.0,
        10.0,
        side,
        OrderOperation::Add,
    )
    .ok()
}

fn populate_orderbook(book: &OrderBook, count: usize) {
    info!("Pre-populating OrderBook with {} orders...", count);
    for i in 0..count {
        let (side, price) = if i % 2 == 0 {
            (OrderSide::Bid, 99.0 - (i % 20) as f64 * 0.1)
        } else {
            (OrderSide::Ask, 101.0 + (i % 20) as f64 * 0.1)
        };
        if let Some(order) = new_request(price, side) {
            let _ = book.update_order_book(order);
        }
    }
    book.log_order_book_state();
}

fn run_performance_test() {
    let book = Arc::new(OrderBook::new("PERF-TEST"));
    populate_orderbook(&book, 1000);

    let barrier = Arc::new(Barrier::new(THREAD_COUNT + 1)); // +1 for main thread
    let running = Arc::new(AtomicBool::new(true));
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for thread_id in 0..THREAD_COUNT {
        let thread_book = Arc::clone(&book);
        let thread_barrier = Arc::clone(&barrier);
        let thread_running = Arc::clone(&running);

        handles.push(thread::spawn(move || {
            thread_barrier.wait();

            let mut local_counter = 0usize;
            let mut own: Vec<String> = Vec::new();

            while thread_running.load(Ordering::Relaxed) {
                match thread_id % 4 {
                    0 => {
                        // Adds on alternating sides
                        let side = if local_counter % 2 == 0 {
                            OrderSide::Bid
                        } else {
                            OrderSide::Ask
                        };
                        let price = match side {
                            OrderSide::Bid => 99.0 - (local_counter % 10) as f64 * 0.1,
                            OrderSide::Ask => 101.0 + (local_counter % 10) as f64 * 0.1,
                        };
                        if let Some(order) = new_request(price, side) {
                            own.push(order.order_id().to_string());
                            let _ = thread_book.update_order_book(order);
                        }
                    }
                    1 => {
                        // Adds then reprices its own orders
                        if let Some(order) = new_request(98.0, OrderSide::Bid) {
                            let id = order.order_id().to_string();
                            let _ = thread_book.update_order_book(order);
                            if let Ok(update) = Order::new(
                                2,
                                id.as_str(),
                                98.5,
                                10.0,
                                6.0,
                                OrderSide::Bid,
                                OrderOperation::Update,
                            ) {
                                let _ = thread_book.update_order_book(update);
                            }
                            own.push(id);
                        }
                    }
                    2 => {
                        // Cancels what it added plus drains from the other writers
                        if let Some(id) = own.pop() {
                            let _ = thread_book.cancel_order(&id);
                        } else if let Some(order) = thread_book.best_ask_order() {
                            let _ = thread_book.cancel_order(order.order_id());
                        } else if let Some(order) = new_request(101.0, OrderSide::Ask) {
                            own.push(order.order_id().to_string());
                            let _ = thread_book.update_order_book(order);
                        }
                    }
                    _ => {
                        // Pure reader
                        let _ = thread_book.best_bid_price();
                        let _ = thread_book.best_ask_order();
                        let _ = thread_book.total_bid_volume_at_price_level(1);
                        let _ = thread_book.create_snapshot(5);
                    }
                }
                local_counter += 1;
            }

            (thread_id, local_counter)
        }));
    }

    barrier.wait();
    let start = Instant::now();
    thread::sleep(Duration::from_secs(TEST_DURATION_SECS));
    running.store(false, Ordering::Relaxed);

    let mut total_operations = 0;
    for handle in handles {
        if let Ok((thread_id, ops)) = handle.join() {
            info!("Thread {} completed {} operations", thread_id, ops);
            total_operations += ops;
        }
    }
    let elapsed = start.elapsed();

    info!("Total operations: {}", total_operations);
    info!(
        "Operations per second: {:.0}",
        total_operations as f64 / elapsed.as_secs_f64()
    );

    book.log_order_book_state();
    match book.check_consistency() {
        Ok(()) => info!("Book is consistent after the run"),
        Err(problem) => info!("Inconsistent book: {}", problem),
    }
}
