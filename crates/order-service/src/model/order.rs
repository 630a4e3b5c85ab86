//! Orders and their line items.
//!
//! An order owns its items: they are created together in one store request and
//! read back together. The stored row is a [`PlacedOrder`].

use super::{CustomerId, OrderId, OrderItemId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// Sum of `unit_price * quantity` over the items, computed when the order is placed.
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Catalog price at the moment the order was placed.
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    /// `unit_price * quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// An order together with its items, oldest item first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl PlacedOrder {
    /// Recomputes the total from the items. `None` on overflow.
    pub fn items_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.line_total()?))
    }
}

/// DTO for order creation: the order row plus every item row, stored as one unit.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(order_id: OrderId, quantity: u32, unit_price: Decimal) -> OrderItem {
        let now = Utc::now();
        OrderItem {
            id: OrderItemId::generate(),
            order_id,
            product_id: ProductId::generate(),
            quantity,
            unit_price,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_items_total_multiplies_quantity_by_snapshot_price() {
        let order_id = OrderId::generate();
        let now = Utc::now();
        let placed = PlacedOrder {
            order: Order {
                id: order_id,
                customer_id: CustomerId::generate(),
                total: Decimal::from(40),
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items: vec![
                item(order_id, 2, Decimal::from(5)),
                item(order_id, 3, Decimal::from(10)),
            ],
        };

        assert_eq!(placed.items_total(), Some(placed.order.total));
    }

    #[test]
    fn test_totals_out_of_range_are_none() {
        let order_id = OrderId::generate();
        let big = Decimal::from_i128_with_scale(10i128.pow(27), 0);

        assert_eq!(item(order_id, 1000, big).line_total(), None);
        assert_eq!(item(order_id, 1, big).line_total(), Some(big));

        let now = Utc::now();
        let placed = PlacedOrder {
            order: Order {
                id: order_id,
                customer_id: CustomerId::generate(),
                total: Decimal::ZERO,
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items: vec![item(order_id, 1, Decimal::MAX), item(order_id, 1, Decimal::ONE)],
        };
        assert_eq!(placed.items_total(), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
    }
}
