//! Category and product operations.

use super::{parse_id, parse_optional_id, required_name, OrderService, ServiceError};
use crate::auth::{authorize, Principal, ADMIN};
use crate::model::{
    Category, CategoryCreate, CategoryId, Product, ProductCreate, ProductId, ProductUpdate,
};
use actor_framework::ActorClient;
use rust_decimal::Decimal;
use tracing::{info, instrument};

/// Input for [`OrderService::create_product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: String,
}

fn non_negative(price: Decimal) -> Result<Decimal, ServiceError> {
    if price < Decimal::ZERO {
        return Err(ServiceError::validation(format!(
            "price must not be negative: {price}"
        )));
    }
    Ok(price)
}

impl OrderService {
    /// Roots when `parent_id` is `None`, otherwise the immediate children of that category.
    #[instrument(skip(self))]
    pub async fn list_root_or_child_categories(
        &self,
        parent_id: Option<&str>,
    ) -> Result<Vec<Category>, ServiceError> {
        let parent: Option<CategoryId> = parse_optional_id("parent id", parent_id)?;
        Ok(self.categories.children(parent).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: &str) -> Result<Category, ServiceError> {
        let id: CategoryId = parse_id("category id", id)?;
        Ok(self.categories.require(id).await?)
    }

    /// Products in the category or any of its descendants.
    #[instrument(skip(self))]
    pub async fn list_products_in_subtree(
        &self,
        category_id: &str,
    ) -> Result<Vec<Product>, ServiceError> {
        let category_id: CategoryId = parse_id("category id", category_id)?;
        Ok(self.products.in_subtree(category_id).await?)
    }

    /// Mean price over [`OrderService::list_products_in_subtree`]; zero when it is empty.
    #[instrument(skip(self))]
    pub async fn average_price_in_subtree(&self, category_id: &str) -> Result<Decimal, ServiceError> {
        let category_id: CategoryId = parse_id("category id", category_id)?;
        Ok(self.products.average_price_in_subtree(category_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<Product, ServiceError> {
        let id: ProductId = parse_id("product id", id)?;
        Ok(self.products.require(id).await?)
    }

    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn create_category(
        &self,
        principal: &Principal,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<Category, ServiceError> {
        authorize(principal, ADMIN)?;
        let params = CategoryCreate {
            id: CategoryId::generate(),
            name: required_name("category name", name)?,
            parent_id: parse_optional_id("parent id", parent_id)?,
        };

        let category = self.categories.create_category(params).await?;
        info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn create_product(
        &self,
        principal: &Principal,
        input: NewProduct,
    ) -> Result<Product, ServiceError> {
        authorize(principal, ADMIN)?;
        let params = ProductCreate {
            id: ProductId::generate(),
            name: required_name("product name", &input.name)?,
            description: input.description,
            price: non_negative(input.price)?,
            category_id: parse_id("category id", &input.category_id)?,
        };

        let product = self.products.create_product(params).await?;
        info!(product_id = %product.id, price = %product.price, "Product created");
        Ok(product)
    }

    /// Changes catalog data. Orders already placed keep the price they were placed at.
    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn update_product(
        &self,
        principal: &Principal,
        id: &str,
        update: ProductUpdate,
    ) -> Result<Product, ServiceError> {
        authorize(principal, ADMIN)?;
        let id: ProductId = parse_id("product id", id)?;
        if update.is_empty() {
            return Err(ServiceError::validation("update changes nothing"));
        }
        if let Some(name) = &update.name {
            required_name("product name", name)?;
        }
        if let Some(price) = update.price {
            non_negative(price)?;
        }

        let product = self.products.update_product(id, update).await?;
        info!(product_id = %product.id, price = %product.price, "Product updated");
        Ok(product)
    }
}
