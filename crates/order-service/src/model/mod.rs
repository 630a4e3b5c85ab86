//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod category;
pub mod customer;
pub mod id;
pub mod order;
pub mod product;

pub use category::*;
pub use customer::*;
pub use id::*;
pub use order::*;
pub use product::*;
