use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListScreenState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListScreenState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::EnterSearch => {
                state.search_mode = true;
            }
            ListIntent::ExitSearch => {
                state.search_mode = false;
            }
            ListIntent::SearchChar(ch) => {
                state.search_input.push(ch);
            }
            ListIntent::SearchBackspace => {
                state.search_input.pop();
            }
            ListIntent::ApplySearch(text) => {
                state.search_input = text.clone();
                state.criteria.search = text;
                state.selected = 0;
            }
            ListIntent::CycleCategory {
                categories,
                forward,
            } => {
                state.criteria.category =
                    cycle_category(state.criteria.category.as_deref(), &categories, forward);
                state.selected = 0;
            }
            ListIntent::SetCategory(category) => {
                state.criteria.category = category;
                state.selected = 0;
            }
            ListIntent::CycleSort => {
                state.criteria.sort = state.criteria.sort.next();
                state.selected = 0;
            }
            ListIntent::SetSort(sort) => {
                state.criteria.sort = sort;
                state.selected = 0;
            }
            ListIntent::MoveUp => {
                state.selected = state.selected.saturating_sub(1);
            }
            ListIntent::MoveDown { visible } => {
                if state.selected + 1 < visible {
                    state.selected += 1;
                }
            }
            ListIntent::ClampSelection { visible } => {
                state.selected = state.selected.min(visible.saturating_sub(1));
            }
        }
        state
    }
}

/// Position 0 is "all" (`None`); positions 1.. are the categories.
fn cycle_category(current: Option<&str>, categories: &[String], forward: bool) -> Option<String> {
    let slots = categories.len() + 1;
    let index = current
        .and_then(|c| categories.iter().position(|known| known == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % slots
    } else {
        (index + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| categories[i].clone())
}
