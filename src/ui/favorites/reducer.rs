use crate::ui::favorites::intent::FavoritesIntent;
use crate::ui::favorites::state::FavoritesScreenState;
use crate::ui::mvi::Reducer;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesScreenState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let selected = match intent {
            FavoritesIntent::MoveUp => state.selected.saturating_sub(1),
            FavoritesIntent::MoveDown { len } if state.selected + 1 < len => state.selected + 1,
            FavoritesIntent::MoveDown { .. } => state.selected,
            FavoritesIntent::Clamp { len } => state.selected.min(len.saturating_sub(1)),
        };
        FavoritesScreenState { selected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let state = [
            FavoritesIntent::MoveDown { len: 3 },
            FavoritesIntent::MoveDown { len: 3 },
            FavoritesIntent::MoveDown { len: 3 },
        ]
        .into_iter()
        .fold(FavoritesScreenState::default(), FavoritesReducer::reduce);
        assert_eq!(state.selected, 2);

        let state = FavoritesReducer::reduce(state, FavoritesIntent::MoveUp);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn clamp_after_removal() {
        let state = FavoritesScreenState { selected: 2 };
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Clamp { len: 2 });
        assert_eq!(state.selected, 1);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Clamp { len: 0 });
        assert_eq!(state.selected, 0);
    }
}
