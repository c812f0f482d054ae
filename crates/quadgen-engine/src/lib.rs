//! quadgen engine crate.
//!
//! The heart of the crate is [`quad`]: the procedural quad vertex stage, which
//! derives the four corners of an axis-aligned quad from one instance record
//! (anchor, width, height, color) and a constant corner table. [`render`] runs
//! the same stage on the GPU; the remaining modules are the host pieces needed
//! to drive it (device, window runtime, per-frame instance store, logging).

pub mod quad;

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod scene;
pub mod window;
