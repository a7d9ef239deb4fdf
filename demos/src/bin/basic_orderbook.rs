// demos/src/bin/basic_orderbook.rs

use fifo_orderbook::{
    Order, OrderBook, OrderBookError, OrderOperation, OrderSide, current_time_millis,
    setup_logger,
};
use tracing::{info, warn};
use uuid::Uuid;

fn main() -> Result<(), OrderBookError> {
    setup_logger();
    info!("Basic OrderBook Example");

    let book = OrderBook::new("BTC/USD");

    let ids = demo_adding_orders(&book)?;
    display_orderbook_state(&book);

    demo_order_lookup(&book, &ids);
    demo_updates(&book, &ids)?;
    demo_cancel_orders(&book, &ids);
    demo_rejections(&book);

    info!("Final OrderBook State:");
    display_orderbook_state(&book);
    Ok(())
}

fn request(
    order_id: &str,
    price: f64,
    volume: f64,
    side: OrderSide,
    operation: OrderOperation,
) -> Result<Order, OrderBookError> {
    Order::new(
        current_time_millis(),
        order_id,
        price,
        volume,
        volume,
        side,
        operation,
    )
}

fn demo_adding_orders(book: &OrderBook) -> Result<Vec<String>, OrderBookError> {
    info!("Adding orders to the OrderBook...");
    let mut ids = Vec::new();

    // Five bid levels below the market and five ask levels above it
    for i in 0..5 {
        let bid_id = Uuid::new_v4().to_string();
        let bid_price = 99.0 + i as f64 * 0.2;
        book.update_order_book(request(
            &bid_id,
            bid_price,
            10.0 + i as f64 * 5.0,
            OrderSide::Bid,
            OrderOperation::Add,
        )?)?;
        info!("Added bid {} at {:.2}", bid_id, bid_price);
        ids.push(bid_id);

        let ask_id = Uuid::new_v4().to_string();
        let ask_price = 101.0 + i as f64 * 0.2;
        book.update_order_book(request(
            &ask_id,
            ask_price,
            10.0 + i as f64 * 5.0,
            OrderSide::Ask,
            OrderOperation::Add,
        )?)?;
        info!("Added ask {} at {:.2}", ask_id, ask_price);
        ids.push(ask_id);
    }

    Ok(ids)
}

fn display_orderbook_state(book: &OrderBook) {
    book.log_order_book_state();
    info!(
        "Best bid: {:.2}, best ask: {:.2}, spread: {:?}, mid: {:?}",
        book.best_bid_price(),
        book.best_ask_price(),
        book.spread(),
        book.mid_price()
    );

    let snapshot = book.create_snapshot(3);
    for level in &snapshot.asks {
        info!(
            "  ask {:>8.2} x {:<6.2} ({} orders)",
            level.price, level.total_volume, level.order_count
        );
    }
    for level in &snapshot.bids {
        info!(
            "  bid {:>8.2} x {:<6.2} ({} orders)",
            level.price, level.total_volume, level.order_count
        );
    }
}

fn demo_order_lookup(book: &OrderBook, ids: &[String]) {
    info!("Looking up orders...");
    for id in ids.iter().take(2) {
        match book.get_order(id) {
            Some(order) => info!("{}", order.details()),
            None => warn!("Order {} not found", id),
        }
    }
    if let Some(order) = book.best_bid_order() {
        info!("Front of the best bid queue: {}", order);
    }
}

fn demo_updates(book: &OrderBook, ids: &[String]) -> Result<(), OrderBookError> {
    info!("Updating orders...");
    // Reprice the first bid to the top of the book
    if let Some(id) = ids.first() {
        let resting = book.update_order_book(request(
            id,
            100.0,
            7.5,
            OrderSide::Bid,
            OrderOperation::Update,
        )?)?;
        info!("Updated {}", resting);
    }
    Ok(())
}

fn demo_cancel_orders(book: &OrderBook, ids: &[String]) {
    info!("Cancelling orders...");
    for id in ids.iter().skip(2).step_by(3) {
        match book.cancel_order(id) {
            Ok(order) => info!("Cancelled {}", order),
            Err(e) => warn!("Cancel failed: {}", e),
        }
    }
}

fn demo_rejections(book: &OrderBook) {
    info!("Submitting invalid requests...");
    if let Err(e) = request("bad", -1.0, 1.0, OrderSide::Bid, OrderOperation::Add) {
        info!("Rejected before reaching the book: {}", e);
    }
    let unknown = request("ghost", 100.0, 1.0, OrderSide::Ask, OrderOperation::Cancel);
    if let Ok(order) = unknown {
        if let Err(e) = book.update_order_book(order) {
            info!("Rejected by the book ({}): {}", e.kind(), e);
        }
    }
    let json = r#"{"timestampMs":1,"orderId":"j","price":100.0,"initialVolume":1.0,"currentVolume":1.0,"orderSide":"bid","orderOperation":"fill"}"#;
    if let Err(e) = book.update_order_book_json(json) {
        info!("Rejected message: {}", e);
    }
}
