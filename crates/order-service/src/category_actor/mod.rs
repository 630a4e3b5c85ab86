//! # Category Actor
//!
//! Owns the category forest and answers tree queries over it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Category`]
//! - [`error`] - [`CategoryError`]
//! - [`queries`] - [`CategoryQuery`] (`Children`, `Subtree`) and its results
//! - [`tree`] - breadth-first subtree closure
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_service::category_actor;
//! use order_service::model::{CategoryCreate, CategoryId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = category_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let root = client
//!         .create_category(CategoryCreate { id: CategoryId::generate(), name: "Tea".into(), parent_id: None })
//!         .await?;
//!     let green = client
//!         .create_category(CategoryCreate { id: CategoryId::generate(), name: "Green".into(), parent_id: Some(root.id) })
//!         .await?;
//!
//!     let subtree = client.subtree(root.id).await?;
//!     assert!(subtree.contains(&green.id));
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Referential integrity**: a parent must exist before its children
//! - **Closure queries**: `Subtree` feeds the product store's catalog queries

pub mod entity;
pub mod error;
pub mod queries;
pub mod tree;

pub use error::*;
pub use queries::*;

use crate::clients::CategoryClient;
use crate::model::Category;
use actor_framework::ResourceActor;

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(generic_client))
}
