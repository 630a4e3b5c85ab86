//! Caller-facing error taxonomy.
//!
//! Store errors are folded into four kinds. `Auth` and `Validation` are always raised
//! before any store is touched.

use crate::auth::AuthError;
use crate::category_actor::CategoryError;
use crate::customer_actor::CustomerError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl ServiceError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ServiceError::Validation(msg.into())
    }
}

impl From<CategoryError> for ServiceError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(id) => ServiceError::NotFound(format!("category {id}")),
            CategoryError::UnknownParent(id) => {
                ServiceError::NotFound(format!("parent category {id}"))
            }
            CategoryError::BlankName => ServiceError::Validation(e.to_string()),
            CategoryError::AlreadyExists(_) | CategoryError::ActorCommunicationError(_) => {
                ServiceError::Persistence(e.to_string())
            }
        }
    }
}

impl From<ProductError> for ServiceError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => ServiceError::NotFound(format!("product {id}")),
            ProductError::UnknownCategory(id) => ServiceError::NotFound(format!("category {id}")),
            ProductError::BlankName
            | ProductError::NegativePrice(_)
            | ProductError::PriceSumOverflow => {
                ServiceError::Validation(e.to_string())
            }
            ProductError::AlreadyExists(_)
            | ProductError::CategoryLookup(_)
            | ProductError::ActorCommunicationError(_) => ServiceError::Persistence(e.to_string()),
        }
    }
}

/// Any failure to store an order is a persistence failure; nothing was written.
impl From<OrderError> for ServiceError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => ServiceError::NotFound(format!("order {id}")),
            other => ServiceError::Persistence(other.to_string()),
        }
    }
}

impl From<CustomerError> for ServiceError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(id) => ServiceError::NotFound(format!("customer {id}")),
            CustomerError::BlankName
            | CustomerError::InvalidEmail(_)
            | CustomerError::EmailTaken(_) => ServiceError::Validation(e.to_string()),
            CustomerError::AlreadyExists(_) | CustomerError::ActorCommunicationError(_) => {
                ServiceError::Persistence(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, ProductId};

    #[test]
    fn test_store_errors_map_to_kinds() {
        let id = ProductId::generate();
        assert!(matches!(
            ServiceError::from(OrderError::UnknownProduct(id)),
            ServiceError::Persistence(_)
        ));
        assert!(matches!(
            ServiceError::from(ProductError::UnknownCategory(CategoryId::generate())),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            ServiceError::from(CategoryError::BlankName),
            ServiceError::Validation(_)
        ));
        assert_eq!(
            ServiceError::from(AuthError::InvalidCredential).to_string(),
            "invalid or expired token"
        );
    }
}
