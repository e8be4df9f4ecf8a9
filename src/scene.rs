use std::sync::Arc;

use glam::Vec2;

use crate::control::{ControlPipeline, AUTO_ROTATE_Y_STEP, AUTO_ROTATE_Z_STEP};
use crate::core::canvas::Canvas;
use crate::mesh::Mesh;
use crate::object::MeshObject;
use crate::render::{draw_object, RenderStats};
use crate::starfield::Starfield;
use crate::tracking::HandSample;

/// Deep-space background
const BACKGROUND: [u8; 3] = [5, 5, 15];

/// Warp speed bounds and keyboard step
pub const WARP_MIN: f32 = 1.0;
pub const WARP_MAX: f32 = 20.0;
pub const WARP_STEP: f32 = 2.0;
pub const WARP_DEFAULT: f32 = 5.0;

/// Discrete user controls, decoded from key events by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleAutoRotate,
    WarpUp,
    WarpDown,
    ResetSmoothing,
}

/// Everything the frame loop mutates, in one explicit aggregate: the mesh
/// instance, the star pool, the control pipeline and the mode flags.
///
/// Per-frame contract: `advance` consumes at most one tracking sample and
/// updates control state; `draw` clears the canvas, runs the starfield, then
/// the mesh. Nothing else touches this state.
pub struct Scene {
    object: MeshObject,
    starfield: Starfield,
    controls: ControlPipeline,
    auto_rotate: bool,
    warp_speed: f32,
    frame: u64,
}

impl Scene {
    pub fn new(mesh: Mesh, width: u32, height: u32, star_count: usize) -> Self {
        Self::with_starfield(mesh, width, height, Starfield::new(star_count))
    }

    /// Scene with a seeded starfield, for deterministic tests
    pub fn with_seeded_stars(mesh: Mesh, width: u32, height: u32, star_count: usize, seed: u64) -> Self {
        Self::with_starfield(mesh, width, height, Starfield::with_seed(star_count, seed))
    }

    fn with_starfield(mesh: Mesh, width: u32, height: u32, starfield: Starfield) -> Self {
        let anchor = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        let controls = ControlPipeline::new(mesh.max_abs_coord());

        Self {
            object: MeshObject::new(Arc::new(mesh), anchor),
            starfield,
            controls,
            auto_rotate: true,
            warp_speed: WARP_DEFAULT,
            frame: 0,
        }
    }

    /// Apply one discrete user command
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::ToggleAutoRotate => {
                self.auto_rotate = !self.auto_rotate;
                log::info!(
                    "auto-rotate {}",
                    if self.auto_rotate { "on" } else { "off" }
                );
            }
            Command::WarpUp => {
                self.warp_speed = (self.warp_speed + WARP_STEP).min(WARP_MAX);
            }
            Command::WarpDown => {
                self.warp_speed = (self.warp_speed - WARP_STEP).max(WARP_MIN);
            }
            Command::ResetSmoothing => {
                self.controls.reset();
                log::info!("smoothing reset");
            }
        }
    }

    /// Advance control state by one frame tick.
    ///
    /// A tracking sample drives the control pipeline and switches off
    /// auto-rotate until it is toggled back on; no sample leaves the
    /// transform untouched apart from the auto-rotate fallback.
    pub fn advance(&mut self, sample: Option<HandSample>) {
        if let Some(sample) = sample {
            self.controls.apply(&sample, &mut self.object);
            self.auto_rotate = false;
        }

        if self.auto_rotate {
            self.object.rotation.y += AUTO_ROTATE_Y_STEP;
            self.object.rotation.z += AUTO_ROTATE_Z_STEP;
        }

        self.frame += 1;
    }

    /// Render one frame: background, starfield, then the mesh
    pub fn draw(&mut self, canvas: &mut Canvas) -> RenderStats {
        canvas.clear(BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], 255);
        self.starfield.advance_and_draw(canvas, self.warp_speed);
        draw_object(canvas, &self.object)
    }

    /// Re-center the object anchor after a viewport change
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.object.anchor = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    }

    pub fn object(&self) -> &MeshObject {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut MeshObject {
        &mut self.object
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn warp_speed(&self) -> f32 {
        self.warp_speed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
