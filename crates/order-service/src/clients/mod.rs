//! Type-safe wrappers around each store's `ResourceClient`.
//!
//! Every client implements [`ActorClient`](actor_framework::ActorClient) for `get` and
//! `require`, and adds the store's own create/query methods. Framework errors are
//! mapped back into the store's error enum, so a rejected hook surfaces as the exact
//! variant the entity returned.

pub mod category_client;
pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use category_client::CategoryClient;
pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;

use actor_framework::FrameworkError;

/// Recovers the entity's own error from a framework error, or hands the framework
/// error to `fallback`.
pub(crate) fn recover<E>(e: FrameworkError, fallback: impl FnOnce(FrameworkError) -> E) -> E
where
    E: std::error::Error + Send + Sync + 'static,
{
    e.into_entity_error::<E>().unwrap_or_else(fallback)
}
