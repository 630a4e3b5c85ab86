//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<PlacedOrder>`; product checks happen in the actor's
//! `on_create` hook.
use super::recover;
use crate::model::{CustomerId, NewOrder, Order, PlacedOrder};
use crate::order_actor::{OrderError, OrderQuery, OrderQueryResult};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<PlacedOrder>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<PlacedOrder>) -> Self {
        Self { inner }
    }

    /// Stores the order and all of its items, or nothing.
    #[instrument(skip(self, params), fields(order_id = %params.order.id, items = params.items.len()))]
    pub async fn create_order(&self, params: NewOrder) -> Result<PlacedOrder, OrderError> {
        debug!(?params, "create_order called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The customer's orders, newest first.
    #[instrument(skip(self))]
    pub async fn by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>, OrderError> {
        let OrderQueryResult::ByCustomer(orders) = self
            .inner
            .query(OrderQuery::ByCustomer(customer_id))
            .await
            .map_err(Self::map_error)?;
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<PlacedOrder> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<PlacedOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover(e, |other| match other {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::AlreadyExists(id) => OrderError::AlreadyExists(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}
