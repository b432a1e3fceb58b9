/// Everything a screen needs to draw itself.
///
/// `Default` is the state before the screen is first shown; `PartialEq`
/// lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
