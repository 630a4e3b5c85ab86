use crate::model::{CustomerId, Order};

#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// A customer's orders, newest first.
    ByCustomer(CustomerId),
}

/// Results from OrderQuery - variants match 1:1 with OrderQuery
#[derive(Debug, Clone)]
pub enum OrderQueryResult {
    ByCustomer(Vec<Order>),
}
