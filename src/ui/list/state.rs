use crate::catalog::FilterCriteria;
use crate::ui::mvi::UiState;

/// Product list screen: applied criteria, the search line being edited and
/// the highlighted row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListScreenState {
    /// Criteria the visible list is derived from.
    pub criteria: FilterCriteria,
    /// Text in the search box. Reaches `criteria.search` through the
    /// debouncer or on Enter.
    pub search_input: String,
    pub search_mode: bool,
    pub selected: usize,
}

impl UiState for ListScreenState {}

impl ListScreenState {
    /// Search text typed but not yet applied.
    pub fn has_pending_search(&self) -> bool {
        self.search_input != self.criteria.search
    }
}
