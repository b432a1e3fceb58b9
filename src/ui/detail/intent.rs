use crate::catalog::{Product, ProductId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    /// Show `id`. `product` is set when it was found locally.
    Open {
        id: ProductId,
        product: Option<Product>,
    },
    /// Lookup for `id` finished; `None` means unknown or failed.
    Resolved {
        id: ProductId,
        product: Option<Product>,
    },
    Increment,
    Decrement,
    Close,
}

impl Intent for DetailIntent {}
