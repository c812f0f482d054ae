mod grid;

use anyhow::Result;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use quadgen_engine::coords::ColorRgba;
use quadgen_engine::core::{App, AppControl, FrameCtx};
use quadgen_engine::device::GpuInit;
use quadgen_engine::logging::{init_logging, LoggingConfig};
use quadgen_engine::render::QuadRenderer;
use quadgen_engine::scene::QuadBatch;
use quadgen_engine::window::{Runtime, RuntimeConfig};

use grid::GridLayout;

const BACKGROUND: ColorRgba = ColorRgba::new(0.02, 0.02, 0.03, 1.0);

struct Studio {
    layout: GridLayout,
    batch: QuadBatch,
    renderer: QuadRenderer,
}

impl App for Studio {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                log::info!("escape pressed, exiting");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();
        let t = ctx.elapsed.as_secs_f32();

        self.batch.clear();
        self.layout.fill(&mut self.batch, viewport, t);

        if ctx.frame_index % 600 == 0 {
            log::debug!("frame {}: {} quads", ctx.frame_index, self.batch.len());
        }

        let (batch, renderer) = (&mut self.batch, &mut self.renderer);
        ctx.render(BACKGROUND, |target| renderer.render(target, batch))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "quadgen studio".to_string(),
        initial_size: LogicalSize::new(960.0, 600.0),
    };

    let studio = Studio {
        layout: GridLayout::new(48, 30),
        batch: QuadBatch::new(),
        renderer: QuadRenderer::new(),
    };

    log::info!("starting quadgen studio");
    Runtime::run(config, GpuInit::default(), studio)
}
