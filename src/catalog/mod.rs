//! Catalog domain: products, filter criteria and the filter/sort engine.

mod criteria;
mod filter;
mod product;

pub use criteria::{parse_category, FilterCriteria, SortOrder};
pub use filter::{categories_of, filter_products};
pub use product::{Product, ProductId, Rating, SUMMARY_CHARS};
