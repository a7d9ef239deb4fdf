// demos/src/bin/price_level_transition.rs
//
// Walks one order through level changes and shows how queue priority moves.

use fifo_orderbook::{Order, OrderBook, OrderBookError, OrderOperation, OrderSide, setup_logger};
use tracing::info;

fn main() -> Result<(), OrderBookError> {
    setup_logger();
    info!("Price Level Transition Example");

    let book = OrderBook::new("ETH/USD");
    let mut ts = 1;
    let mut submit = |id: &str, price: f64, volume: f64, operation: OrderOperation| {
        let order = Order::new(ts, id, price, volume, volume, OrderSide::Ask, operation)?;
        ts += 1;
        book.update_order_book(order)
    };

    submit("first", 100.0, 1.0, OrderOperation::Add)?;
    submit("second", 100.0, 2.0, OrderOperation::Add)?;
    submit("third", 101.0, 3.0, OrderOperation::Add)?;
    print_levels(&book, "after adds");

    // Same price, new volume: the order goes to the back of its queue
    submit("first", 100.0, 0.5, OrderOperation::Update)?;
    print_levels(&book, "after same-price update of 'first'");

    // Moving the only order at 101 removes that level
    submit("third", 100.0, 3.0, OrderOperation::Update)?;
    print_levels(&book, "after moving 'third' to 100");

    // A new better level takes over the top of the book
    submit("fourth", 99.5, 4.0, OrderOperation::Add)?;
    print_levels(&book, "after adding 'fourth' at 99.5");

    submit("fourth", 99.5, 4.0, OrderOperation::Cancel)?;
    print_levels(&book, "after cancelling 'fourth'");

    match book.check_consistency() {
        Ok(()) => info!("Book is consistent"),
        Err(problem) => info!("Inconsistent book: {}", problem),
    }
    Ok(())
}

fn print_levels(book: &OrderBook, label: &str) {
    info!("--- {} ---", label);
    for level in 1..=book.total_number_of_ask_price_levels() as i64 {
        let price = book.ask_price_at_price_level(level);
        let queue: Vec<String> = book
            .get_orders_at_price(price, OrderSide::Ask)
            .iter()
            .map(|o| format!("{}({})", o.order_id(), o.current_volume()))
            .collect();
        info!(
            "  level {} @ {:.2} volume {:.2}: {}",
            level,
            price,
            book.total_ask_volume_at_price_level(level),
            queue.join(" -> ")
        );
    }
    if let Some(best) = book.best_ask_order() {
        info!("  best ask order: {}", best.order_id());
    }
}
