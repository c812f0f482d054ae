use std::time::Duration;

use winit::window::Window;

use crate::coords::{ColorRgba, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::DrawTarget;

use super::app::AppControl;

/// Handed to [`App::on_frame`](super::App::on_frame) once per redraw.
///
/// `'w` is the window borrow carried by the [`Gpu`].
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    /// Frames presented before this one.
    pub frame_index: u64,
    /// Time since the window opened.
    pub elapsed: Duration,
}

impl FrameCtx<'_, '_> {
    /// Window size in logical pixels.
    pub fn viewport(&self) -> Viewport {
        let size = self.window.inner_size().to_logical::<f32>(self.window.scale_factor());
        Viewport::new(size.width, size.height)
    }

    /// Clears to `clear`, lets `draw` record on top, then presents.
    ///
    /// Minimized windows and transient surface errors skip the frame. Only a
    /// fatal surface error asks the runtime to exit.
    pub fn render(&mut self, clear: ColorRgba, draw: impl FnOnce(&mut DrawTarget<'_>)) -> AppControl {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(&err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };
        frame.clear(clear);

        let viewport = self.viewport();
        draw(&mut DrawTarget {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            format: self.gpu.surface_format(),
            encoder: &mut frame.encoder,
            view: &frame.view,
            viewport,
        });

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        AppControl::Continue
    }
}
