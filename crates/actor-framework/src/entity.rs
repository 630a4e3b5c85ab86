//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored row type (Category, Product,
//! Order, Customer, ...) implements to be owned by a generic [`ResourceActor`](crate::ResourceActor).
//! It names the key, the create/update payloads, the store-wide query vocabulary, the
//! runtime context and the error type, and provides the hooks the actor calls while
//! processing requests.
//!
//! # Architecture Note
//! Rows are keyed by an identifier the *caller* assigns (usually a UUID newtype). The
//! actor never invents keys; it only refuses duplicates. This keeps the store a plain
//! persistence layer: it stores exactly what it is given.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::check_constraints`] - synchronous checks against the rows already stored
//! - [`ActorEntity::on_create`] - async checks that need the injected context
//! - [`ActorEntity::on_update`] - defaults to rejecting updates
//!
//! A request that fails any hook leaves the store untouched.

use crate::store::EntityStore;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored row type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The `Context` type is
/// injected into `run()` rather than `new()`, which lets a store hold clients of stores
/// created after it ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this row.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to insert a new row.
    type Create: Send + Sync + Debug;

    /// The data required to modify an existing row.
    /// Use [`std::convert::Infallible`] for immutable rows.
    type Update: Send + Sync + Debug;

    /// Store-wide read operations (e.g. `Children`, `ByCustomer`).
    type Query: Send + Sync + Debug;

    /// The result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per store, not one per request. Clients then deal with a single
    /// `ProductError`, `OrderError`, ... type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the row from its create payload. Pure validation happens here.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The key under which this row is stored.
    fn id(&self) -> &Self::Id;

    /// Checks that need to see the rows already stored (foreign keys within the
    /// same table, secondary unique indexes). Runs before `on_create`.
    fn check_constraints(&self, _existing: &EntityStore<Self>) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before insertion.
    /// Use this hook for checks against other stores (reachable through the context).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for an existing row.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Query Handler (Async) ---

    /// Answer a store-wide query against the current rows.
    async fn handle_query(
        query: Self::Query,
        rows: &EntityStore<Self>,
        ctx: &Self::Context,
    ) -> Result<Self::QueryResult, Self::Error>;
}
