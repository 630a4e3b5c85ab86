//! [`ActorEntity`] implementation for [`Product`].
//!
//! The product actor runs with a [`CategoryClient`] as its context: creation checks
//! that the owning category exists, and subtree queries ask the category store for
//! the closure before filtering.

use super::queries::{average_price, ProductQuery, ProductQueryResult};
use super::ProductError;
use crate::clients::CategoryClient;
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::{ActorClient, ActorEntity, EntityStore};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashSet;

fn checked_name(name: &str) -> Result<String, ProductError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductError::BlankName);
    }
    Ok(name.to_string())
}

fn checked_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(price)
}

async fn closure_of(
    categories: &CategoryClient,
    root: CategoryId,
) -> Result<HashSet<CategoryId>, ProductError> {
    categories
        .subtree(root)
        .await
        .map_err(|e| ProductError::CategoryLookup(e.to_string()))
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Query = ProductQuery;
    type QueryResult = ProductQueryResult;
    type Context = CategoryClient;
    type Error = ProductError;

    fn from_create_params(params: ProductCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id: params.id,
            name: checked_name(&params.name)?,
            description: params.description,
            price: checked_price(params.price)?,
            category_id: params.category_id,
            created_at: now,
            updated_at: now,
        })
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), Self::Error> {
        match categories.get(self.category_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ProductError::UnknownCategory(self.category_id)),
            Err(e) => Err(ProductError::CategoryLookup(e.to_string())),
        }
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: must not be blank
    /// - `description`
    /// - `price`: must not be negative; existing order items keep their snapshot
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _categories: &CategoryClient,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = checked_name(&name)?;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = checked_price(price)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_query(
        query: ProductQuery,
        rows: &EntityStore<Self>,
        categories: &CategoryClient,
    ) -> Result<ProductQueryResult, Self::Error> {
        match query {
            ProductQuery::InSubtree(root) => {
                let closure = closure_of(categories, root).await?;
                Ok(ProductQueryResult::InSubtree(
                    rows.iter()
                        .filter(|p| closure.contains(&p.category_id))
                        .cloned()
                        .collect(),
                ))
            }
            ProductQuery::AveragePriceInSubtree(root) => {
                let closure = closure_of(categories, root).await?;
                let average =
                    average_price(rows.iter().filter(|p| closure.contains(&p.category_id)))?;
                Ok(ProductQueryResult::AveragePriceInSubtree(average))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: i64) -> ProductCreate {
        ProductCreate {
            id: ProductId::generate(),
            name: name.to_string(),
            description: None,
            price: Decimal::from(price),
            category_id: CategoryId::generate(),
        }
    }

    #[test]
    fn test_create_validates_name_and_price() {
        assert_eq!(
            Product::from_create_params(create("   ", 1)).unwrap_err(),
            ProductError::BlankName
        );
        assert_eq!(
            Product::from_create_params(create("Mug", -3)).unwrap_err(),
            ProductError::NegativePrice(Decimal::from(-3))
        );

        let free = Product::from_create_params(create("  Sticker ", 0)).unwrap();
        assert_eq!(free.name, "Sticker");
        assert_eq!(free.price, Decimal::ZERO);
    }
}
