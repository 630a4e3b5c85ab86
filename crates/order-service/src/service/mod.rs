//! # Order Service
//!
//! The operations the outside world calls. Each takes plain inputs (ids as strings),
//! parses and validates them, checks the caller's role where required, and talks to
//! the stores through their clients.
//!
//! - [`catalog`] - categories and products
//! - [`ordering`] - order placement and order reads
//! - [`customers`] - customer registration and lookup
//!
//! Reads of the public catalog take no principal. Everything else takes a
//! [`Principal`](crate::auth::Principal) explicitly and runs
//! [`authorize`](crate::auth::authorize) before touching a store.

pub mod catalog;
pub mod customers;
pub mod error;
pub mod ordering;

pub use catalog::NewProduct;
pub use error::ServiceError;
pub use ordering::LineItemInput;

use crate::clients::{CategoryClient, CustomerClient, OrderClient, ProductClient};
use crate::notification::NotificationDispatcher;
use std::str::FromStr;

/// Handle onto every store plus the notification queue. Cheap to clone.
#[derive(Clone)]
pub struct OrderService {
    categories: CategoryClient,
    products: ProductClient,
    orders: OrderClient,
    customers: CustomerClient,
    notifications: NotificationDispatcher,
}

impl OrderService {
    pub fn new(
        categories: CategoryClient,
        products: ProductClient,
        orders: OrderClient,
        customers: CustomerClient,
        notifications: NotificationDispatcher,
    ) -> Self {
        Self {
            categories,
            products,
            orders,
            customers,
            notifications,
        }
    }
}

/// Parses an identifier argument, naming the argument in the error.
pub(crate) fn parse_id<T: FromStr>(field: &str, raw: &str) -> Result<T, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::validation(format!("invalid {field}: {raw:?}")))
}

pub(crate) fn parse_optional_id<T: FromStr>(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<T>, ServiceError> {
    raw.map(|raw| parse_id(field, raw)).transpose()
}

pub(crate) fn required_name(field: &str, raw: &str) -> Result<String, ServiceError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be blank")));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_parse_id_names_the_field() {
        let err = parse_id::<ProductId>("product id", "nope").unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("invalid product id: \"nope\"".into())
        );
    }

    #[test]
    fn test_optional_id() {
        assert_eq!(parse_optional_id::<ProductId>("parent id", None).unwrap(), None);
        let id = ProductId::generate();
        assert_eq!(
            parse_optional_id::<ProductId>("parent id", Some(&id.to_string())).unwrap(),
            Some(id)
        );
    }
}
