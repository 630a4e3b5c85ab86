//! # Product Actor
//!
//! This module implements the Product resource actor: the catalog of products and the
//! subtree-filtered queries over it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`queries`] - [`ProductQuery`] and [`ProductQueryResult`] for catalog reads
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Catalog Queries
//!
//! ```rust,ignore
//! // Products in a category or any of its descendants
//! let products = product_client.in_subtree(category_id).await?;
//!
//! // Mean price over the same set (zero when empty)
//! let average = product_client.average_price_in_subtree(category_id).await?;
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use order_service::{category_actor, product_actor};
//! use order_service::model::{CategoryCreate, CategoryId, ProductCreate, ProductId};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (category_actor, categories) = category_actor::new(32);
//!     let (product_actor, products) = product_actor::new(32);
//!
//!     // The product actor checks categories through the injected client
//!     tokio::spawn(category_actor.run(()));
//!     tokio::spawn(product_actor.run(categories.clone()));
//!
//!     let shop = categories
//!         .create_category(CategoryCreate { id: CategoryId::generate(), name: "Shop".into(), parent_id: None })
//!         .await?;
//!     products
//!         .create_product(ProductCreate {
//!             id: ProductId::generate(),
//!             name: "Widget".into(),
//!             description: None,
//!             price: Decimal::new(2999, 2),
//!             category_id: shop.id,
//!         })
//!         .await?;
//!
//!     assert_eq!(products.average_price_in_subtree(shop.id).await?, Decimal::new(2999, 2));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod queries;

pub use error::*;
pub use queries::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
