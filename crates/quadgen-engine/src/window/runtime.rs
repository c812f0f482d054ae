use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadgen".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Single-window event loop driving an [`App`].
pub struct Runtime;

impl Runtime {
    /// Blocks until the app exits, the window closes, or startup fails.
    pub fn run<A: App + 'static>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("cannot create the event loop")?;
        let mut driver = Driver {
            config,
            gpu_init,
            app,
            session: None,
            error: None,
        };

        event_loop.run_app(&mut driver).context("event loop failed")?;
        driver.error.map_or(Ok(()), Err)
    }
}

/// The open window and the GPU state borrowing it.
#[self_referencing]
struct Session {
    opened: Instant,
    frames: u64,
    window: Window,
    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl Session {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, init: &GpuInit) -> Result<Self> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(config.title.as_str())
                    .with_inner_size(config.initial_size),
            )
            .context("cannot create the window")?;

        SessionTryBuilder {
            opened: Instant::now(),
            frames: 0,
            window,
            gpu_builder: |window| pollster::block_on(Gpu::new(window, init)),
        }
        .try_build()
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }

    fn frame(&mut self, app: &mut impl App) -> AppControl {
        self.with_mut(|s| {
            let mut ctx = FrameCtx {
                window: s.window,
                gpu: s.gpu,
                frame_index: *s.frames,
                elapsed: s.opened.elapsed(),
            };
            let control = app.on_frame(&mut ctx);
            *s.frames += 1;
            control
        })
    }
}

struct Driver<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    session: Option<Session>,
    /// Reported by `Runtime::run` once the loop has stopped.
    error: Option<anyhow::Error>,
}

impl<A: App> Driver<A> {
    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.session = None;
        event_loop.exit();
    }
}

impl<A: App> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match Session::open(event_loop, &self.config, &self.gpu_init) {
            Ok(session) => {
                log::info!("window \"{}\" open", self.config.title);
                self.session = Some(session);
            }
            Err(err) => {
                log::error!("startup failed: {err:#}");
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Redraw continuously; the app animates every frame.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(session) = &self.session {
            session.borrow_window().request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shut_down(event_loop);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => self.shut_down(event_loop),
            WindowEvent::Resized(size) => session.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = session.borrow_window().inner_size();
                session.resize(size);
            }
            WindowEvent::RedrawRequested => {
                if session.frame(&mut self.app) == AppControl::Exit {
                    self.shut_down(event_loop);
                }
            }
            _ => {}
        }
    }
}
