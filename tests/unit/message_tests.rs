//! Raw message intake: decoding, validation and dispatch

#[cfg(test)]
mod message_tests {
    use fifo_orderbook::{ErrorKind, OrderBook, OrderBookError, OrderMessage, OrderSide};

    fn message(id: &str, price: f64, side: &str, operation: &str) -> OrderMessage {
        OrderMessage {
            timestamp_ms: Some(1),
            order_id: Some(id.to_string()),
            price: Some(price),
            initial_volume: Some(5.0),
            current_volume: Some(5.0),
            order_side: Some(side.to_string()),
            order_operation: Some(operation.to_string()),
        }
    }

    #[test]
    fn test_message_lifecycle() {
        let book = OrderBook::new("MSG");
        book.process_message(message("m1", 100.0, "BID", "ADD")).unwrap();
        book.process_message(message("m1", 101.0, "bid", "update")).unwrap();
        assert_eq!(book.best_bid_price(), 101.0);

        book.process_message(message("m1", 101.0, "bid", "cancel")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_unsupported_operation() {
        let book = OrderBook::new("MSG");
        let err = book.process_message(message("m1", 100.0, "bid", "trade")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(book.is_empty());
    }

    #[test]
    fn test_empty_message() {
        let book = OrderBook::new("MSG");
        let err = book.process_message(OrderMessage::default()).unwrap_err();
        assert_eq!(
            err,
            OrderBookError::InvalidArgument {
                order_id: String::new(),
                field: "order_id",
                reason: "is missing".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_order_id() {
        let book = OrderBook::new("MSG");
        let err = book.process_message(message("", 100.0, "ask", "add")).unwrap_err();
        match err {
            OrderBookError::InvalidArgument { field, .. } => assert_eq!(field, "order_id"),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_json_with_extra_fields() {
        let book = OrderBook::new("MSG");
        let json = r#"{"timestampMs":5,"orderId":"x","price":10.5,"initialVolume":1.0,"currentVolume":1.0,"orderSide":"ask","orderOperation":"add","venue":"XNAS"}"#;
        book.update_order_book_json(json).unwrap();
        assert_eq!(book.best_ask_price(), 10.5);
        assert_eq!(book.get_order("x").unwrap().side(), OrderSide::Ask);
    }
}
