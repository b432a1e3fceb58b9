use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesIntent {
    MoveUp,
    MoveDown { len: usize },
    /// Favorites changed length (removal, or a toggle on another screen).
    Clamp { len: usize },
}

impl Intent for FavoritesIntent {}
