//! GPU device + window surface.
//!
//! [`Gpu`] pairs a device/queue with the surface of one window. Frames are
//! acquired as [`GpuFrame`]s and presented through [`Gpu::submit`].

mod context;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use frame::GpuFrame;
pub use init::GpuInit;
pub use surface::{classify_surface_error, SurfaceErrorAction};
