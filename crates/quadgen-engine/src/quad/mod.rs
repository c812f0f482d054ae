//! Procedural quad vertex stage.
//!
//! A quad is never stored as four vertices. Each instance carries an anchor,
//! a width, a height and a color; the four corners are derived per invocation
//! from a constant unit-square table indexed by the vertex index (0..=3).
//!
//! This module is the CPU reference of the stage. The GPU copy lives in
//! `render/shaders/quad.wgsl` and must stay in lockstep with it.

mod corners;
mod generator;
mod instance;
mod transform;

pub use corners::{CORNER_COUNT, CORNER_OFFSETS};
pub use generator::{generate_vertex, quad_corners, VertexOutput};
pub use instance::InstanceRecord;
pub use transform::QuadTransform;
