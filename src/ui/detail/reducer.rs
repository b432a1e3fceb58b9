use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::quantity::Quantity;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { id, product } => match product {
                Some(product) => DetailState::Ready {
                    product,
                    quantity: Quantity::default(),
                },
                None => DetailState::Loading { id },
            },
            DetailIntent::Resolved { id, product } => match state {
                // Only the lookup we are still waiting for may land.
                DetailState::Loading { id: waiting } if waiting == id => match product {
                    Some(product) => DetailState::Ready {
                        product,
                        quantity: Quantity::default(),
                    },
                    None => DetailState::NotFound { id },
                },
                other => other,
            },
            DetailIntent::Increment => match state {
                DetailState::Ready { product, quantity } => DetailState::Ready {
                    product,
                    quantity: quantity.increment(),
                },
                other => other,
            },
            DetailIntent::Decrement => match state {
                DetailState::Ready { product, quantity } => DetailState::Ready {
                    product,
                    quantity: quantity.decrement(),
                },
                other => other,
            },
            DetailIntent::Close => DetailState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductId, Rating};

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: "Mens Casual Slim Fit".to_string(),
            price: 15.99,
            description: "The color could be slightly different".to_string(),
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: Rating { rate: 2.1, count: 430 },
        }
    }

    fn open_ready(id: u64) -> DetailState {
        DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::Open {
                id: ProductId(id),
                product: Some(product(id)),
            },
        )
    }

    #[test]
    fn open_with_local_product_is_ready_at_quantity_one() {
        let state = open_ready(4);
        assert_eq!(state.product().map(|p| p.id), Some(ProductId(4)));
        assert!(matches!(state, DetailState::Ready { quantity, .. } if quantity.get() == 1));
    }

    #[test]
    fn open_without_product_waits_for_lookup() {
        let state = DetailReducer::reduce(
            DetailState::default(),
            DetailIntent::Open {
                id: ProductId(9),
                product: None,
            },
        );
        assert_eq!(state, DetailState::Loading { id: ProductId(9) });

        let state = DetailReducer::reduce(
            state,
            DetailIntent::Resolved {
                id: ProductId(9),
                product: None,
            },
        );
        assert_eq!(state, DetailState::NotFound { id: ProductId(9) });
    }

    #[test]
    fn lookup_for_another_id_is_ignored() {
        let state = DetailState::Loading { id: ProductId(2) };
        let state = DetailReducer::reduce(
            state,
            DetailIntent::Resolved {
                id: ProductId(1),
                product: Some(product(1)),
            },
        );
        assert_eq!(state, DetailState::Loading { id: ProductId(2) });
    }

    #[test]
    fn quantity_stepper_clamps() {
        let mut state = open_ready(1);
        state = DetailReducer::reduce(state, DetailIntent::Increment);
        assert!(matches!(&state, DetailState::Ready { quantity, .. } if quantity.get() == 2));
        state = DetailReducer::reduce(state, DetailIntent::Decrement);
        state = DetailReducer::reduce(state, DetailIntent::Decrement);
        assert!(matches!(&state, DetailState::Ready { quantity, .. } if quantity.get() == 1));
        for _ in 0..12 {
            state = DetailReducer::reduce(state, DetailIntent::Increment);
        }
        assert!(matches!(&state, DetailState::Ready { quantity, .. } if quantity.get() == 10));
    }

    #[test]
    fn reopening_resets_quantity() {
        let state = DetailReducer::reduce(open_ready(1), DetailIntent::Increment);
        let state = DetailReducer::reduce(
            state,
            DetailIntent::Open {
                id: ProductId(1),
                product: Some(product(1)),
            },
        );
        assert!(matches!(state, DetailState::Ready { quantity, .. } if quantity.get() == 1));
    }

    #[test]
    fn close_returns_to_default() {
        assert_eq!(
            DetailReducer::reduce(open_ready(3), DetailIntent::Close),
            DetailState::Closed
        );
    }
}
