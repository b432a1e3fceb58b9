//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! key / network event ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Screens keep their state as a plain value. The only way to change it is
//! to hand an intent to the screen's reducer, which returns the next value.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
