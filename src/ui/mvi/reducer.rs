use super::intent::Intent;
use super::state::UiState;

/// Pure transition function of one screen.
///
/// Reducers never perform I/O. Work with side effects (requests,
/// persistence) happens in `App` before or after the call.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
