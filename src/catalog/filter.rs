//! Filter/sort engine for the product list.

use std::cmp::Ordering;

use crate::catalog::criteria::{FilterCriteria, SortOrder};
use crate::catalog::product::Product;

/// Derive the visible list from a collection and criteria.
///
/// Search is a case-insensitive substring match on title or description,
/// category is an exact match, both must hold. The result borrows from the
/// input and is sorted with a stable sort, so equal keys keep input order.
pub fn filter_products<'a, I>(products: I, criteria: &FilterCriteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let query = criteria.search.to_lowercase();
    let mut visible: Vec<&'a Product> = products
        .into_iter()
        .filter(|product| matches_search(product, &query))
        .filter(|product| matches_category(product, criteria.category.as_deref()))
        .collect();

    visible.sort_by(|a, b| compare(a, b, criteria.sort));
    visible
}

/// Distinct categories in first-seen order.
pub fn categories_of(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

fn matches_search(product: &Product, lowered_query: &str) -> bool {
    if lowered_query.is_empty() {
        return true;
    }
    product.title.to_lowercase().contains(lowered_query)
        || product.description.to_lowercase().contains(lowered_query)
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        Some(category) => product.category == category,
        None => true,
    }
}

fn compare(a: &Product, b: &Product, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::PriceAsc => a.price.total_cmp(&b.price),
        SortOrder::PriceDesc => b.price.total_cmp(&a.price),
        SortOrder::Rating => b.rating.rate.total_cmp(&a.rating.rate),
        SortOrder::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
