//! Interactive terminal browser.

pub mod app;
pub mod debounce;
pub mod detail;
pub mod events;
pub mod favorites;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use route::{Route, RouteError};
pub use runtime::run;
