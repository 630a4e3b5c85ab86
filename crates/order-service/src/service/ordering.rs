//! Order placement and order reads.

use super::{parse_id, OrderService, ServiceError};
use crate::auth::{authorize, authorize_any, Principal, ADMIN, CUSTOMER};
use crate::model::{
    CustomerId, NewOrder, Order, OrderId, OrderItem, OrderItemId, OrderStatus, PlacedOrder,
    ProductId,
};
use actor_framework::ActorClient;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument};

/// One requested line: which product and how many. The price is never taken from
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemInput {
    pub product_id: String,
    pub quantity: i64,
}

impl LineItemInput {
    pub fn new(product_id: impl ToString, quantity: i64) -> Self {
        Self {
            product_id: product_id.to_string(),
            quantity,
        }
    }
}

fn parse_line(line: &LineItemInput) -> Result<(ProductId, u32), ServiceError> {
    let product_id = parse_id("product id", &line.product_id)?;
    let quantity = u32::try_from(line.quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or_else(|| {
            ServiceError::validation(format!(
                "quantity for product {} must be a positive integer, got {}",
                line.product_id, line.quantity
            ))
        })?;
    Ok((product_id, quantity))
}

impl OrderService {
    /// Places an order for `customer_id`.
    ///
    /// 1. the principal must hold `customer`
    /// 2. every identifier and quantity is checked before any store call
    /// 3. each line is priced from the product store and the price is snapshotted;
    ///    a total outside the `Decimal` range is a validation error
    /// 4. order and items are stored as one unit
    /// 5. confirmations are queued; delivery never affects the result
    ///
    /// Not idempotent: calling it twice places two orders.
    #[instrument(skip(self, principal, items), fields(principal = %principal.id, items = items.len()))]
    pub async fn place_order(
        &self,
        principal: &Principal,
        customer_id: &str,
        items: &[LineItemInput],
    ) -> Result<PlacedOrder, ServiceError> {
        authorize(principal, CUSTOMER)?;

        let customer_id: CustomerId = parse_id("customer id", customer_id)?;
        if items.is_empty() {
            return Err(ServiceError::validation("order must contain at least one item"));
        }
        let lines = items
            .iter()
            .map(parse_line)
            .collect::<Result<Vec<_>, _>>()?;

        let order_id = OrderId::generate();
        let now = Utc::now();
        let mut total = Decimal::ZERO;
        let mut order_items = Vec::with_capacity(lines.len());
        for (product_id, quantity) in lines {
            let product = self.products.require(product_id).await?;
            let item = OrderItem {
                id: OrderItemId::generate(),
                order_id,
                product_id,
                quantity,
                unit_price: product.price,
                created_at: now,
                updated_at: now,
            };
            total = item
                .line_total()
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| ServiceError::validation("order total out of range"))?;
            order_items.push(item);
        }

        let params = NewOrder {
            order: Order {
                id: order_id,
                customer_id,
                total,
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items: order_items,
        };
        let placed = self
            .orders
            .create_order(params)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        info!(order_id = %placed.order.id, %total, "Order placed");

        // The customer's contact details are resolved on the worker
        self.notifications
            .confirm_order(placed.clone(), principal.email.clone());
        Ok(placed)
    }

    /// The order with its items, oldest item first.
    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn get_order(&self, principal: &Principal, id: &str) -> Result<PlacedOrder, ServiceError> {
        authorize_any(principal, &[CUSTOMER, ADMIN])?;
        let id: OrderId = parse_id("order id", id)?;
        Ok(self.orders.require(id).await?)
    }

    /// The customer's orders, newest first.
    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn list_orders_for_customer(
        &self,
        principal: &Principal,
        customer_id: &str,
    ) -> Result<Vec<Order>, ServiceError> {
        authorize_any(principal, &[CUSTOMER, ADMIN])?;
        let customer_id: CustomerId = parse_id("customer id", customer_id)?;
        Ok(self.orders.by_customer(customer_id).await?)
    }
}
