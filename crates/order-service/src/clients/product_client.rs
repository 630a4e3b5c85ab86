//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes catalog-specific methods.
use super::recover;
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductError, ProductQuery, ProductQueryResult};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover(e, |other| match other {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ProductError::AlreadyExists(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a partial update and returns the stored product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Products in `category_id` or any of its descendants.
    #[instrument(skip(self))]
    pub async fn in_subtree(&self, category_id: CategoryId) -> Result<Vec<Product>, ProductError> {
        match self
            .inner
            .query(ProductQuery::InSubtree(category_id))
            .await
            .map_err(Self::map_error)?
        {
            ProductQueryResult::InSubtree(products) => Ok(products),
            other => Err(unexpected(other)),
        }
    }

    /// Mean price over [`ProductClient::in_subtree`]; zero when there are no products.
    #[instrument(skip(self))]
    pub async fn average_price_in_subtree(
        &self,
        category_id: CategoryId,
    ) -> Result<Decimal, ProductError> {
        match self
            .inner
            .query(ProductQuery::AveragePriceInSubtree(category_id))
            .await
            .map_err(Self::map_error)?
        {
            ProductQueryResult::AveragePriceInSubtree(average) => Ok(average),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: ProductQueryResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected query result: {result:?}"))
}
