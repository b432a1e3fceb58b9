use crate::catalog::{Product, ProductId};
use crate::ui::detail::quantity::Quantity;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    /// Product not in the collection yet; a lookup is in flight.
    Loading { id: ProductId },
    Ready { product: Product, quantity: Quantity },
    NotFound { id: ProductId },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Ready { product, .. } => Some(product),
            _ => None,
        }
    }
}
