use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use space_navigator::cli::Cli;
use space_navigator::core::{Canvas, Clock, FramePacer, SurfaceRenderer};
use space_navigator::meshes::create_spaceship_mesh;
use space_navigator::scene::{Command, Scene};
use space_navigator::tracking::{NullTracking, StdinTracking, TrackingSource};

/// Best-effort frame cap; the scene's per-frame constants are tuned for it
const TARGET_FPS: f32 = 60.0;
const FPS_LOG_INTERVAL: f32 = 1.0;

fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Space => Some(Command::ToggleAutoRotate),
        KeyCode::ArrowUp => Some(Command::WarpUp),
        KeyCode::ArrowDown => Some(Command::WarpDown),
        KeyCode::KeyR => Some(Command::ResetSmoothing),
        _ => None,
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
    scene: Scene,
    canvas: Canvas,
    tracking: Box<dyn TrackingSource>,
    clock: Clock,
    pacer: FramePacer,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    fn new(cli: &Cli) -> anyhow::Result<Self> {
        let mesh = create_spaceship_mesh()?;
        let scene = Scene::new(mesh, cli.width, cli.height, cli.stars);

        let tracking: Box<dyn TrackingSource> = if cli.no_tracking {
            Box::new(NullTracking)
        } else {
            Box::new(StdinTracking::spawn())
        };

        Ok(Self {
            window: None,
            renderer: None,
            scene,
            canvas: Canvas::new(cli.width, cli.height),
            tracking,
            clock: Clock::new(),
            pacer: FramePacer::new(TARGET_FPS),
            frame_count: 0,
            fps_timer: 0.0,
        })
    }

    /// One frame: pull a tracking sample, advance the scene, redraw the
    /// canvas, present it
    fn step_frame(&mut self) {
        let sample = self.tracking.poll();
        self.scene.advance(sample);

        let stats = self.scene.draw(&mut self.canvas);
        if stats.faces_skipped > 0 {
            log::trace!("skipped {} malformed faces this frame", stats.faces_skipped);
        }

        if let Some(renderer) = &self.renderer {
            let (width, height) = self.canvas.dimensions();
            if let Err(e) = renderer.render_pixels(self.canvas.pixels(), width, height) {
                log::error!("present failed: {}", e);
            }
        }

        self.frame_count += 1;
    }

    fn log_fps(&mut self, delta: f32) {
        self.fps_timer += delta;
        if self.fps_timer >= FPS_LOG_INTERVAL {
            log::debug!("FPS: {:.1}", self.frame_count as f32 / self.fps_timer);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.canvas.dimensions();
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Space Navigator")
                    .with_inner_size(winit::dpi::LogicalSize::new(width, height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match SurfaceRenderer::new(window.clone()) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // The actual surface can differ from the requested logical size
            // (DPI scaling), so sync canvas and anchor to it
            let size = window.inner_size();
            if size.width > 0 && size.height > 0 {
                self.canvas = Canvas::new(size.width, size.height);
                self.scene.set_viewport(size.width, size.height);
            }

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if code == KeyCode::Escape {
                            event_loop.exit();
                        } else if let Some(command) = command_for_key(code) {
                            self.scene.handle(command);
                        }
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(size.width, size.height);
                    }
                    self.canvas = Canvas::new(size.width, size.height);
                    self.scene.set_viewport(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                if self.pacer.tick(delta) {
                    self.step_frame();
                }
                self.log_fps(delta);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("controls: SPACE auto-rotate, Up/Down warp speed, R reset smoothing, ESC quit");
    if !cli.no_tracking {
        log::info!("reading tracking samples from stdin (newline-delimited JSON)");
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
