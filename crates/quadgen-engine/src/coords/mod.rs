//! Coordinate and geometry types shared by the quad core and its host.
//!
//! Two spaces are in play:
//! - clip space: what `InstanceRecord` anchors and sizes are expressed in
//!   (center origin, +Y up, `[-1, 1]` across the viewport)
//! - logical pixels: what hosts usually lay out in (top-left origin, +Y down)
//!
//! `Viewport` converts the latter into the former.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
