//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent in-memory stores. Each store is an actor:
//! one Tokio task owns one table of rows and answers requests from cloneable clients over
//! a channel. This gives a **Resource-Oriented** surface (Create, Get, Update, Query) on
//! top of the **Actor Model** (isolated state, message passing, sequential processing).
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the row type, its payloads, hooks and queries
//! 2. **Storage Layer** ([`EntityStore`]) - the insertion-ordered table an actor owns
//! 3. **Runtime Layer** ([`ResourceActor`]) - message processing
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! Rows carry their own key. The store never generates identifiers; a request whose
//! key is already taken fails with [`FrameworkError::AlreadyExists`].
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, EntityStore, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, label: String, aisle: u32 }
//!
//! #[derive(Debug)] struct ShelfRename(String);
//! #[derive(Debug)] struct InAisle(u32);
//! #[derive(Debug, thiserror::Error)]
//! enum ShelfError {
//!     #[error("label must not be blank")] BlankLabel,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = Shelf;
//!     type Update = ShelfRename;
//!     type Query = InAisle;
//!     type QueryResult = Vec<Shelf>;
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(params: Shelf) -> Result<Self, ShelfError> {
//!         if params.label.trim().is_empty() { return Err(ShelfError::BlankLabel); }
//!         Ok(params)
//!     }
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     async fn on_update(&mut self, update: ShelfRename, _: &()) -> Result<(), ShelfError> {
//!         self.label = update.0;
//!         Ok(())
//!     }
//!
//!     async fn handle_query(q: InAisle, rows: &EntityStore<Self>, _: &()) -> Result<Vec<Shelf>, ShelfError> {
//!         Ok(rows.iter().filter(|s| s.aisle == q.0).cloned().collect())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.create(Shelf { id: 1, label: "Tea".into(), aisle: 4 }).await.unwrap();
//!     client.create(Shelf { id: 2, label: "Coffee".into(), aisle: 4 }).await.unwrap();
//!     assert!(client.create(Shelf { id: 3, label: " ".into(), aisle: 4 }).await.is_err());
//!
//!     let aisle = client.query(InAisle(4)).await.unwrap();
//!     assert_eq!(aisle.len(), 2);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! A product store can therefore hold the category store's client and check foreign keys
//! in `on_create`, while both actors are created up front in any order.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are processed **sequentially** within an actor (no locks needed)
//! - Different actors run in parallel
//!
//! ## Testing
//!
//! The [`mock`] module hands out real `ResourceClient<T>` handles backed by scripted
//! replies, so code around a store can be tested without spawning it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
