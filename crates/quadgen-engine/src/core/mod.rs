//! Contract between the window runtime and the application driving it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
