//! # Generic Messages
//!
//! The request type sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// # Resource-Oriented Architecture
/// Every store speaks the same small vocabulary instead of ad-hoc messages:
///
/// - **Create**: inserts a row built from [`ActorEntity::Create`]; replies with the stored row.
/// - **Get**: fetches a row by key.
/// - **Update**: applies [`ActorEntity::Update`] to an existing row.
/// - **Query**: answers a store-wide [`ActorEntity::Query`] (children, subtree, by owner, ...).
///
/// The enum is generic over `T: ActorEntity`, so a `Product` payload can never reach a
/// `Category` store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
}
