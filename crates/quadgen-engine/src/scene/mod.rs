//! Per-frame instance store.
//!
//! Hosts fill a [`QuadBatch`] with instance records each frame; the renderer
//! drains it in a deterministic paint order (z-index, then insertion order).

mod batch;
mod key;

pub use batch::{QuadBatch, QuadItem};
pub use key::{SortKey, ZIndex};
