//! [`ActorEntity`] implementation for [`PlacedOrder`].
//!
//! One stored row is one order plus all of its items, so a create request is the
//! transaction: every item is checked before anything is inserted, and a single
//! failing item rejects the whole order.
//!
//! The store persists exactly what it is given. It never computes totals or prices.

use super::queries::{OrderQuery, OrderQueryResult};
use super::OrderError;
use crate::clients::ProductClient;
use crate::model::{NewOrder, OrderId, OrderItem, OrderItemId, PlacedOrder};
use actor_framework::{ActorClient, ActorEntity, EntityStore};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::convert::Infallible;

/// Validates one item against its order and the items staged before it.
fn stage_item(
    order_id: OrderId,
    item: &OrderItem,
    staged: &mut HashSet<OrderItemId>,
) -> Result<(), OrderError> {
    if item.order_id != order_id {
        return Err(OrderError::ForeignItem {
            item: item.id,
            belongs_to: item.order_id,
            order: order_id,
        });
    }
    if item.quantity == 0 {
        return Err(OrderError::InvalidQuantity(item.id));
    }
    if item.unit_price < Decimal::ZERO {
        return Err(OrderError::NegativeUnitPrice(item.id));
    }
    if !staged.insert(item.id) {
        return Err(OrderError::DuplicateItem(item.id));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for PlacedOrder {
    type Id = OrderId;
    type Create = NewOrder;
    type Update = Infallible;
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(params: NewOrder) -> Result<Self, Self::Error> {
        let NewOrder { order, items } = params;
        if items.is_empty() {
            return Err(OrderError::EmptyOrder(order.id));
        }
        let mut staged = HashSet::with_capacity(items.len());
        for item in &items {
            stage_item(order.id, item, &mut staged)?;
        }
        Ok(Self { order, items })
    }

    fn id(&self) -> &OrderId {
        &self.order.id
    }

    /// Item ids are unique across every stored order.
    fn check_constraints(&self, existing: &EntityStore<Self>) -> Result<(), Self::Error> {
        let taken: HashSet<_> = existing
            .iter()
            .flat_map(|placed| placed.items.iter().map(|item| item.id))
            .collect();
        match self.items.iter().find(|item| taken.contains(&item.id)) {
            Some(item) => Err(OrderError::DuplicateItem(item.id)),
            None => Ok(()),
        }
    }

    /// Every item must reference an existing product.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), Self::Error> {
        for item in &self.items {
            match products.get(item.product_id).await {
                Ok(Some(_)) => {}
                Ok(None) => return Err(OrderError::UnknownProduct(item.product_id)),
                Err(e) => return Err(OrderError::ProductLookup(e.to_string())),
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &ProductClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_query(
        query: OrderQuery,
        rows: &EntityStore<Self>,
        _ctx: &ProductClient,
    ) -> Result<OrderQueryResult, Self::Error> {
        match query {
            OrderQuery::ByCustomer(customer_id) => {
                // Reverse insertion order breaks timestamp ties in favour of the later order.
                let mut orders: Vec<_> = rows
                    .iter()
                    .rev()
                    .filter(|placed| placed.order.customer_id == customer_id)
                    .map(|placed| placed.order.clone())
                    .collect();
                orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                Ok(OrderQueryResult::ByCustomer(orders))
            }
        }
    }
}
