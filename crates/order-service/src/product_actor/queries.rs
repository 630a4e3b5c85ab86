//! Catalog queries for the Product actor.
//!
//! Both queries work on the same category closure, fetched from the category store
//! through the actor's context, so the listing and the average always agree.

use super::ProductError;
use crate::model::{CategoryId, Product};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum ProductQuery {
    /// Every product whose category is the given one or a descendant of it.
    InSubtree(CategoryId),
    /// Mean price over [`ProductQuery::InSubtree`]; zero when that set is empty.
    AveragePriceInSubtree(CategoryId),
}

/// Results from ProductQuery - variants match 1:1 with ProductQuery
#[derive(Debug, Clone)]
pub enum ProductQueryResult {
    InSubtree(Vec<Product>),
    AveragePriceInSubtree(Decimal),
}

/// Arithmetic mean of the prices, or exactly zero for no products.
///
/// Fails with [`ProductError::PriceSumOverflow`] when the sum leaves the `Decimal` range.
pub fn average_price<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> Result<Decimal, ProductError> {
    let (sum, count) = products
        .into_iter()
        .try_fold((Decimal::ZERO, 0u64), |(sum, count), p| {
            sum.checked_add(p.price).map(|sum| (sum, count + 1))
        })
        .ok_or(ProductError::PriceSumOverflow)?;
    if count == 0 {
        Ok(Decimal::ZERO)
    } else {
        Ok(sum / Decimal::from(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use chrono::Utc;

    fn priced(price: i64) -> Product {
        let now = Utc::now();
        Product {
            id: ProductId::generate(),
            name: format!("p{price}"),
            description: None,
            price: Decimal::from(price),
            category_id: CategoryId::generate(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        assert_eq!(average_price(std::iter::empty()), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_average_is_arithmetic_mean() {
        let products = [priced(10), priced(20)];
        assert_eq!(average_price(&products), Ok(Decimal::from(15)));

        let products = [priced(1), priced(2), priced(4)];
        assert_eq!(
            average_price(&products),
            Ok(Decimal::from(7) / Decimal::from(3))
        );
    }

    #[test]
    fn test_average_reports_sum_overflow() {
        let mut huge = [priced(0), priced(0)];
        for p in &mut huge {
            p.price = Decimal::MAX;
        }
        assert_eq!(average_price(&huge), Err(ProductError::PriceSumOverflow));

        // A single maximal price still averages to itself
        assert_eq!(average_price(&huge[..1]), Ok(Decimal::MAX));
    }
}
