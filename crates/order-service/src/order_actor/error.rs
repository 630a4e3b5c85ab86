//! Error types for the Order actor.

use crate::model::{OrderId, OrderItemId, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Every create-time variant means the whole order was rejected: neither the order
/// row nor any of its items were stored.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order with this id is already stored.
    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    #[error("Order {0} has no items")]
    EmptyOrder(OrderId),

    /// An item claims to belong to a different order.
    #[error("Item {item} belongs to order {belongs_to}, not {order}")]
    ForeignItem {
        item: OrderItemId,
        belongs_to: OrderId,
        order: OrderId,
    },

    #[error("Item {0} must have a positive quantity")]
    InvalidQuantity(OrderItemId),

    #[error("Item {0} has a negative unit price")]
    NegativeUnitPrice(OrderItemId),

    /// The item id is already used, inside this order or by a stored one.
    #[error("Duplicate order item: {0}")]
    DuplicateItem(OrderItemId),

    /// An item references a product that does not exist.
    #[error("Invalid product: {0}")]
    UnknownProduct(ProductId),

    /// The product store could not answer.
    #[error("Product lookup failed: {0}")]
    ProductLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
