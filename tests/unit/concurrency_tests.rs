//! Multi-threaded churn against one shared book

#[cfg(test)]
mod concurrency_tests {
    use crate::common::order;
    use fifo_orderbook::{OrderBook, OrderOperation, OrderSide};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    const WRITERS: usize = 4;
    const ORDERS_PER_WRITER: usize = 500;

    #[test]
    fn test_concurrent_adds_are_all_recorded() {
        let book = Arc::new(OrderBook::new("CONCURRENT"));
        let barrier = Arc::new(Barrier::new(WRITERS));

        let handles: Vec<_> = (0..WRITERS)
            .map(|writer| {
                let book = Arc::clone(&book);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..ORDERS_PER_WRITER {
                        let side = if i % 2 == 0 { OrderSide::Bid } else { OrderSide::Ask };
                        let price = match side {
                            OrderSide::Bid => 90.0 + (i % 10) as f64,
                            OrderSide::Ask => 110.0 + (i % 10) as f64,
                        };
                        let id = format!("{writer}-{i}");
                        book.update_order_book(order(
                            i as u64 + 1,
                            &id,
                            price,
                            1.0,
                            side,
                            OrderOperation::Add,
                        ))
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(book.total_number_of_active_orders(), WRITERS * ORDERS_PER_WRITER);
        assert_eq!(book.total_order_volume(), (WRITERS * ORDERS_PER_WRITER) as f64);
        assert_eq!(book.total_number_of_bid_price_levels(), 5);
        assert_eq!(book.total_number_of_ask_price_levels(), 5);
        assert!(book.check_consistency().is_ok());
    }

    #[test]
    fn test_readers_see_consistent_state_during_churn() {
        let book = Arc::new(OrderBook::new("CHURN"));
        let running = Arc::new(AtomicBool::new(true));

        // Writers cycle add -> update -> cancel on their own ids
        let writers: Vec<_> = (0..WRITERS)
            .map(|writer| {
                let book = Arc::clone(&book);
                thread::spawn(move || {
                    for i in 0..ORDERS_PER_WRITER {
                        let id = format!("{writer}-{i}");
                        let side = if writer % 2 == 0 { OrderSide::Bid } else { OrderSide::Ask };
                        let price = 100.0 + (i % 7) as f64;
                        let ts = i as u64 + 1;
                        book.update_order_book(order(ts, &id, price, 2.0, side, OrderOperation::Add))
                            .unwrap();
                        book.update_order_book(order(
                            ts,
                            &id,
                            price + 0.5,
                            1.0,
                            side,
                            OrderOperation::Update,
                        ))
                        .unwrap();
                        if i % 3 != 0 {
                            book.update_order_book(order(
                                ts,
                                &id,
                                price + 0.5,
                                1.0,
                                side,
                                OrderOperation::Cancel,
                            ))
                            .unwrap();
                        }
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let book = Arc::clone(&book);
                let running = Arc::clone(&running);
                thread::spawn(move || {
                    let mut checks = 0usize;
                    while running.load(Ordering::Relaxed) {
                        let summary = book.summary();
                        assert_eq!(
                            summary.total_orders,
                            summary.bid_orders + summary.ask_orders
                        );
                        assert!(summary.bid_levels <= summary.bid_orders);
                        assert!(summary.ask_levels <= summary.ask_orders);
                        assert_eq!(summary.best_bid_price == 0.0, summary.bid_orders == 0);
                        assert_eq!(summary.best_ask_price == 0.0, summary.ask_orders == 0);

                        let snapshot = book.create_snapshot(usize::MAX);
                        for level in snapshot.bids.iter().chain(snapshot.asks.iter()) {
                            assert!(level.order_count > 0);
                            assert_eq!(level.orders.len(), level.order_count);
                        }
                        assert!(book.check_consistency().is_ok());
                        checks += 1;
                    }
                    checks
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }
        running.store(false, Ordering::Relaxed);
        for reader in readers {
            reader.join().unwrap();
        }

        // Every third order per writer survives
        let survivors = WRITERS * ORDERS_PER_WRITER.div_ceil(3);
        assert_eq!(book.total_number_of_active_orders(), survivors);
        assert_eq!(book.total_order_volume(), survivors as f64);
        assert!(book.check_consistency().is_ok());
    }
}
