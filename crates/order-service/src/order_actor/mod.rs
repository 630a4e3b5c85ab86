//! # Order Actor
//!
//! Persists orders together with their line items and reads them back.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`PlacedOrder`]
//! - [`error`] - [`OrderError`]
//! - [`queries`] - [`OrderQuery::ByCustomer`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Atomicity
//!
//! The actor handles one request at a time and only inserts a row after every hook
//! succeeded. An order whose third item references an unknown product is rejected as a
//! whole; a later `get` for its id returns `None`.
//!
//! The actor runs with a [`ProductClient`](crate::clients::ProductClient) as its context
//! to check product references.

pub mod entity;
pub mod error;
pub mod queries;

pub use error::*;
pub use queries::*;

use crate::clients::OrderClient;
use crate::model::PlacedOrder;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PlacedOrder>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
