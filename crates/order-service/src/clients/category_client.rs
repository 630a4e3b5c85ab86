//! # Category Client
//!
//! Provides a high‑level API for interacting with the `Category` actor.
use super::recover;
use crate::category_actor::{CategoryError, CategoryQuery, CategoryQueryResult};
use crate::model::{Category, CategoryCreate, CategoryId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Immediate children of `parent`, or the root categories for `None`.
    #[instrument(skip(self))]
    pub async fn children(&self, parent: Option<CategoryId>) -> Result<Vec<Category>, CategoryError> {
        match self
            .inner
            .query(CategoryQuery::Children(parent))
            .await
            .map_err(Self::map_error)?
        {
            CategoryQueryResult::Children(categories) => Ok(categories),
            other => Err(unexpected(other)),
        }
    }

    /// `root` plus all of its descendants; empty when `root` is unknown.
    #[instrument(skip(self))]
    pub async fn subtree(&self, root: CategoryId) -> Result<HashSet<CategoryId>, CategoryError> {
        match self
            .inner
            .query(CategoryQuery::Subtree(root))
            .await
            .map_err(Self::map_error)?
        {
            CategoryQueryResult::Subtree(ids) => Ok(ids),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: CategoryQueryResult) -> CategoryError {
    CategoryError::ActorCommunicationError(format!("unexpected query result: {result:?}"))
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover(e, |other| match other {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            FrameworkError::AlreadyExists(id) => CategoryError::AlreadyExists(id),
            other => CategoryError::ActorCommunicationError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, expect_query};
    use chrono::Utc;

    fn category(name: &str, parent_id: Option<CategoryId>) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId::generate(),
            name: name.to_string(),
            parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_children_sends_parent_filter() {
        let (client, mut receiver) = create_mock_client::<Category>(10);
        let categories = CategoryClient::new(client);
        let parent = CategoryId::generate();
        let child = category("Green", Some(parent));
        let expected = vec![child.clone()];

        let task = tokio::spawn(async move { categories.children(Some(parent)).await });

        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert!(matches!(query, CategoryQuery::Children(Some(id)) if id == parent));
        responder
            .send(Ok(CategoryQueryResult::Children(vec![child])))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let (client, mut receiver) = create_mock_client::<Category>(10);
        let categories = CategoryClient::new(client);
        let missing = CategoryId::generate();

        let task = tokio::spawn(async move {
            categories
                .create_category(CategoryCreate {
                    id: CategoryId::generate(),
                    name: "Orphan".into(),
                    parent_id: Some(missing),
                })
                .await
        });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                CategoryError::UnknownParent(missing),
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            CategoryError::UnknownParent(missing)
        );
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let (client, mut receiver) = create_mock_client::<Category>(10);
        let categories = CategoryClient::new(client);

        let task = tokio::spawn(async move { categories.subtree(CategoryId::generate()).await });

        let (_, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        responder
            .send(Ok(CategoryQueryResult::Children(vec![])))
            .unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(CategoryError::ActorCommunicationError(_))
        ));
    }
}
