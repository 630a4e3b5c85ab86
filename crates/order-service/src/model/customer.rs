use super::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered purchaser.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`crate::customer_actor`] for details on:
/// - Creation parameters ([`CustomerCreate`])
/// - Paging ([`CustomerQuery`](crate::customer_actor::CustomerQuery))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Unique across customers, compared case-insensitively.
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for registering a new customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}
