use crate::catalog::SortOrder;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    EnterSearch,
    ExitSearch,
    /// Character typed into the search box.
    SearchChar(char),
    SearchBackspace,
    /// Debounced (or flushed) text becomes the applied search.
    ApplySearch(String),
    /// Step through "all" followed by `categories`.
    CycleCategory { categories: Vec<String>, forward: bool },
    SetCategory(Option<String>),
    CycleSort,
    SetSort(SortOrder),
    MoveUp,
    MoveDown { visible: usize },
    /// Keep the selection inside a list that just changed length.
    ClampSelection { visible: usize },
}

impl Intent for ListIntent {}
