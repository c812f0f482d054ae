//! GPU rendering subsystem.
//!
//! `QuadRenderer` is the invocation driver for the quad stage: it uploads a
//! `QuadBatch` as instance data and issues one instanced draw with exactly four
//! vertex indices per instance. Batches larger than one buffer can hold are
//! drawn in several passes.
//!
//! Convention:
//! - instance records are already in clip space; no viewport uniform is bound.

mod common;
mod quad;
mod target;

pub use target::DrawTarget;
pub use quad::{QuadRenderer, QUAD_SHADER_WGSL};
