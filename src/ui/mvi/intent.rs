/// Something that happened: a key press the screen understands, or a
/// result arriving from the worker.
pub trait Intent: Send + 'static {}
