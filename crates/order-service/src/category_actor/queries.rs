//! Store-wide reads for the Category actor.
//!
//! Answered by [`ActorEntity::handle_query`](actor_framework::ActorEntity::handle_query)
//! on [`Category`](crate::model::Category).

use crate::model::{Category, CategoryId};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub enum CategoryQuery {
    /// Immediate children of a category, or the roots when `None`.
    Children(Option<CategoryId>),
    /// The category plus all of its descendants.
    Subtree(CategoryId),
}

/// Results from CategoryQuery - variants match 1:1 with CategoryQuery
#[derive(Debug, Clone)]
pub enum CategoryQueryResult {
    Children(Vec<Category>),
    Subtree(HashSet<CategoryId>),
}
