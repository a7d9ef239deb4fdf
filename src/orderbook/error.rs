//! Order book error types

use std::fmt;
use thiserror::Error;

/// Category of a rejected mutation, for callers that only need to branch on
/// the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request or one of its fields failed validation
    InvalidArgument,
    /// The referenced order is not resting in the book
    NotFound,
    /// The operation tag is not one of add, update or cancel
    UnsupportedOperation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::UnsupportedOperation => write!(f, "unsupported operation"),
        }
    }
}

/// Errors that can occur within the OrderBook.
///
/// Every variant describes a single rejected request. The book is left
/// untouched by a rejected request and remains usable afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderBookError {
    /// A request field violated the validation rules
    #[error("Invalid argument for order '{order_id}': {field} {reason}")]
    InvalidArgument {
        /// Id of the order the request refers to, empty when unknown
        order_id: String,
        /// Name of the offending field
        field: &'static str,
        /// Description of the violation
        reason: String,
    },

    /// Order not found in the book
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Operation tag outside of add, update and cancel
    #[error("Unsupported order operation: {0}")]
    UnsupportedOperation(String),
}

impl OrderBookError {
    /// Shorthand for building an [`OrderBookError::InvalidArgument`]
    pub fn invalid(order_id: &str, field: &'static str, reason: impl Into<String>) -> Self {
        OrderBookError::InvalidArgument {
            order_id: order_id.to_string(),
            field,
            reason: reason.into(),
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderBookError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            OrderBookError::OrderNotFound(_) => ErrorKind::NotFound,
            OrderBookError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }

    /// The order id implicated by this error, if any
    pub fn order_id(&self) -> Option<&str> {
        match self {
            OrderBookError::InvalidArgument { order_id, .. } if !order_id.is_empty() => {
                Some(order_id)
            }
            OrderBookError::OrderNotFound(id) => Some(id),
            _ => None,
        }
    }
}
