//! # Notification Port
//!
//! Post-commit side effects (order confirmation SMS and email).
//!
//! - [`NotificationSink`] is the delivery contract; transports live outside this crate.
//!   [`NoopSink`] and [`LogSink`] ship for wiring and the demo.
//! - [`NotificationDispatcher`] is what the service holds. `dispatch` and
//!   `confirm_order` never wait: they queue onto a bounded channel drained by a
//!   [`NotificationWorker`] task that the system owns, so a finished request does not
//!   cancel its notifications.
//! - [`RecipientDirectory`] is how the worker finds out where to send an order
//!   confirmation. The lookup happens on the worker, after the caller has its answer.
//!
//! Delivery is best effort. A full queue drops the notification with a warning; a
//! failed send is logged by the worker. Neither reaches the caller of `place_order`.

pub mod dispatcher;
pub mod sinks;

pub use dispatcher::{NotificationDispatcher, NotificationWorker};
pub use sinks::{LogSink, NoopSink};

use crate::model::{Customer, CustomerId, PlacedOrder};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ORDER_EMAIL_SUBJECT: &str = "Order Confirmation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum Notification {
    Sms {
        to: String,
        body: String,
    },
    Email {
        to: String,
        subject: String,
        body: String,
    },
}

impl Notification {
    pub fn channel(&self) -> &'static str {
        match self {
            Notification::Sms { .. } => "sms",
            Notification::Email { .. } => "email",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("{channel} delivery to {to} failed: {reason}")]
    DeliveryFailed {
        channel: &'static str,
        to: String,
        reason: String,
    },

    #[error("contact lookup failed: {0}")]
    ContactLookup(String),
}

/// Delivers one notification.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Where to send the confirmation for one order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Customer> for Recipient {
    fn from(customer: Customer) -> Self {
        Self {
            name: Some(customer.name),
            email: Some(customer.email),
            phone: customer.phone,
        }
    }
}

/// Contact details by customer id. `Ok(None)` when the customer is not registered.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    async fn recipient(&self, customer_id: CustomerId) -> Result<Option<Recipient>, NotificationError>;
}

/// The confirmation messages for `placed`: an SMS when a phone number is known and an
/// email when an address is known.
pub fn order_confirmations(placed: &PlacedOrder, recipient: &Recipient) -> Vec<Notification> {
    let order = &placed.order;
    let mut out = Vec::with_capacity(2);
    if let Some(phone) = &recipient.phone {
        out.push(Notification::Sms {
            to: phone.clone(),
            body: format!(
                "Your order {} has been placed. Total: {:.2}",
                order.id, order.total
            ),
        });
    }
    if let Some(email) = &recipient.email {
        let name = recipient.name.as_deref().unwrap_or("customer");
        out.push(Notification::Email {
            to: email.clone(),
            subject: ORDER_EMAIL_SUBJECT.to_string(),
            body: format!(
                "Dear {name},\n\nYour order {} for {:.2} was successful!",
                order.id, order.total
            ),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, Order, OrderId, OrderStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn placed(total: Decimal) -> PlacedOrder {
        let now = Utc::now();
        PlacedOrder {
            order: Order {
                id: OrderId::generate(),
                customer_id: CustomerId::generate(),
                total,
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items: vec![],
        }
    }

    #[test]
    fn test_confirmations_for_full_recipient() {
        let placed = placed(Decimal::from(40));
        let recipient = Recipient {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            phone: Some("+15550100".into()),
        };

        let sent = order_confirmations(&placed, &recipient);
        assert_eq!(
            sent,
            vec![
                Notification::Sms {
                    to: "+15550100".into(),
                    body: format!("Your order {} has been placed. Total: 40.00", placed.order.id),
                },
                Notification::Email {
                    to: "ada@example.com".into(),
                    subject: "Order Confirmation".into(),
                    body: format!(
                        "Dear Ada,\n\nYour order {} for 40.00 was successful!",
                        placed.order.id
                    ),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_contact_skips_channel() {
        let placed = placed(Decimal::new(1999, 2));
        let recipient = Recipient {
            email: Some("guest@example.com".into()),
            ..Default::default()
        };

        let sent = order_confirmations(&placed, &recipient);
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            Notification::Email { body, .. } => {
                assert!(body.starts_with("Dear customer,"));
                assert!(body.contains("19.99"));
            }
            other => panic!("expected email, got {other:?}"),
        }

        assert!(order_confirmations(&placed, &Recipient::default()).is_empty());
    }
}
