//! [`ActorEntity`] implementation for [`Category`].

use super::queries::{CategoryQuery, CategoryQueryResult};
use super::tree::subtree_closure;
use super::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId};
use actor_framework::{ActorEntity, EntityStore};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = Infallible;
    type Query = CategoryQuery;
    type QueryResult = CategoryQueryResult;
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(params: CategoryCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CategoryError::BlankName);
        }
        let now = Utc::now();
        Ok(Self {
            id: params.id,
            name: name.to_string(),
            parent_id: params.parent_id,
            created_at: now,
            updated_at: now,
        })
    }

    fn id(&self) -> &CategoryId {
        &self.id
    }

    /// The parent must already be stored. Since a row can only point at an older row,
    /// the parent relation stays acyclic.
    fn check_constraints(&self, existing: &EntityStore<Self>) -> Result<(), Self::Error> {
        match self.parent_id {
            Some(parent) if !existing.contains(&parent) => Err(CategoryError::UnknownParent(parent)),
            _ => Ok(()),
        }
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_query(
        query: CategoryQuery,
        rows: &EntityStore<Self>,
        _ctx: &(),
    ) -> Result<CategoryQueryResult, Self::Error> {
        match query {
            CategoryQuery::Children(parent) => Ok(CategoryQueryResult::Children(
                rows.iter()
                    .filter(|c| c.parent_id == parent)
                    .cloned()
                    .collect(),
            )),
            CategoryQuery::Subtree(root) => Ok(CategoryQueryResult::Subtree(subtree_closure(
                rows.iter().map(|c| (c.id, c.parent_id)),
                root,
            ))),
        }
    }
}
