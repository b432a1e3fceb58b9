mod intent;
mod reducer;
mod state;

pub use intent::FavoritesIntent;
pub use reducer::FavoritesReducer;
pub use state::FavoritesScreenState;
