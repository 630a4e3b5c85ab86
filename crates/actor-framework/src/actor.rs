//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns one table of rows and
//! processes requests against it sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a table of `T` rows.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Each actor processes its own messages *sequentially*,
/// so the store needs no `Mutex`: every request sees a consistent table and nothing a
/// request stages becomes visible unless the whole request succeeds.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the actor (server) and client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, EntityStore, ResourceActor};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct AllTags;
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = Tag;
///     type Update = Infallible;
///     type Query = AllTags;
///     type QueryResult = Vec<Tag>;
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(params: Tag) -> Result<Self, TagError> { Ok(params) }
///     fn id(&self) -> &u32 { &self.id }
///     async fn on_update(&mut self, u: Infallible, _: &()) -> Result<(), TagError> { match u {} }
///     async fn handle_query(_: AllTags, rows: &EntityStore<Self>, _: &()) -> Result<Vec<Tag>, TagError> {
///         Ok(rows.iter().cloned().collect())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(Tag { id: 7, label: "sale".into() }).await.unwrap();
///     let tags = client.query(AllTags).await.unwrap();
///     assert_eq!(tags.len(), 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: builds the row (`from_create_params`), refuses a taken key, runs
///   `check_constraints` against the current rows, awaits `on_create`, then inserts.
/// * **Get**: returns a clone of the row, or `None`.
/// * **Update**: applies `on_update` to a copy of the row and swaps it in only on success.
/// * **Query**: hands the whole table to `handle_query`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every hook, so rows can reach stores that
    /// were created after this actor but before the loop started.
    pub async fn run(mut self, context: T::Context) {
        // "Category" instead of "order_service::model::category::Category"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.insert(params, &context).await;
                    match &result {
                        Ok(row) => {
                            info!(entity_type, id = %row.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = current.clone();
                    match draft.on_update(update, &context).await {
                        Ok(()) => {
                            *current = draft.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let result = T::handle_query(query, &self.store, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Query failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn insert(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut row =
            T::from_create_params(params).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if self.store.contains(row.id()) {
            return Err(FrameworkError::AlreadyExists(row.id().to_string()));
        }
        row.check_constraints(&self.store)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        row.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store
            .insert(row.clone())
            .map_err(|rejected| FrameworkError::AlreadyExists(rejected.id().to_string()))?;
        Ok(row)
    }
}
