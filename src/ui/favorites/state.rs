use crate::ui::mvi::UiState;

/// Favorites screen. The items themselves live in `FavoritesStore`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesScreenState {
    pub selected: usize,
}

impl UiState for FavoritesScreenState {}
