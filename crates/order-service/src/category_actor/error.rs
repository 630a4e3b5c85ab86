//! Error types for the Category actor.

use crate::model::CategoryId;
use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// A category with this id is already stored.
    #[error("Category already exists: {0}")]
    AlreadyExists(String),

    #[error("Category name must not be blank")]
    BlankName,

    /// The declared parent does not reference an existing category.
    #[error("Parent category not found: {0}")]
    UnknownParent(CategoryId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
