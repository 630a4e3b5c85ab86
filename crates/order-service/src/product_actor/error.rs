//! Error types for the Product actor.

use crate::model::CategoryId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with this id is already stored.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    #[error("Product name must not be blank")]
    BlankName,

    #[error("Product price must not be negative: {0}")]
    NegativePrice(Decimal),

    /// The prices in a subtree add up to more than `Decimal` can hold.
    #[error("Product prices in subtree are too large to average")]
    PriceSumOverflow,

    /// The owning category does not exist.
    #[error("Category not found: {0}")]
    UnknownCategory(CategoryId),

    /// The category store could not answer.
    #[error("Category lookup failed: {0}")]
    CategoryLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
