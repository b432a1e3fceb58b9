mod intent;
mod quantity;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use quantity::Quantity;
pub use reducer::DetailReducer;
pub use state::DetailState;
