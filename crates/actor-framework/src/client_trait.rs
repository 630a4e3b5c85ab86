//! # ActorClient Trait
//!
//! Common interface for store-specific clients: default `get` and `require` built on
//! top of a generic `ResourceClient`, with framework errors mapped into the store's
//! own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard reads.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, EntityStore, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug, thiserror::Error)]
/// enum TagError {
///     #[error("tag not found: {0}")] NotFound(String),
///     #[error("store unavailable: {0}")] Unavailable(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = Tag; type Update = Infallible;
///     type Query = (); type QueryResult = (); type Context = (); type Error = TagError;
///     fn from_create_params(params: Tag) -> Result<Self, TagError> { Ok(params) }
///     fn id(&self) -> &u32 { &self.id }
///     async fn on_update(&mut self, u: Infallible, _: &()) -> Result<(), TagError> { match u {} }
///     async fn handle_query(_: (), _: &EntityStore<Self>, _: &()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError {
///         match e {
///             FrameworkError::NotFound(id) => TagError::NotFound(id),
///             other => TagError::Unavailable(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get() and require() are provided automatically
///     let _maybe = client.get(1).await;
///     let _row = client.require(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a row by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a row by key, treating absence as `FrameworkError::NotFound`.
    #[tracing::instrument(skip(self))]
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        match self.inner().get(id.clone()).await.map_err(Self::map_error)? {
            Some(row) => Ok(row),
            None => Err(Self::map_error(FrameworkError::NotFound(id.to_string()))),
        }
    }
}
