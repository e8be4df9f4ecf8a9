use crate::object::MeshObject;
use crate::tracking::HandSample;

/// Smoothing coefficients per signal stage
pub const HAND_POSITION_SMOOTHING: f32 = 0.85;
pub const PINCH_SMOOTHING: f32 = 0.9;
pub const ROTATION_SMOOTHING: f32 = 0.8;
pub const SCALE_SMOOTHING: f32 = 0.85;

/// Per-frame commit limits; together with the 60 Hz pacer these bound visual
/// angular and scale velocity after a tracking re-acquisition
pub const MAX_ROTATION_STEP: f32 = 0.08;
pub const MAX_SCALE_STEP: f32 = 0.05;

/// Auto-rotate fallback increments, per frame tick (not wall-clock scaled)
pub const AUTO_ROTATE_Y_STEP: f32 = 0.01;
pub const AUTO_ROTATE_Z_STEP: f32 = 0.005;

/// Pipeline scale mapping: the largest vertex coordinate is normalized to
/// this extent before the pinch factor applies
const PIPELINE_TARGET_EXTENT: f32 = 200.0;

/// Exponential low-pass filter over a scalar signal stream.
///
/// The first update after construction (or reset) echoes its input exactly,
/// so the filter re-anchors instantly instead of lagging in from zero.
#[derive(Debug, Clone)]
pub struct Smoother {
    value: Option<f32>,
    smoothing: f32,
}

impl Smoother {
    pub fn new(smoothing: f32) -> Self {
        Self {
            value: None,
            smoothing,
        }
    }

    pub fn update(&mut self, raw: f32) -> f32 {
        let next = match self.value {
            None => raw,
            Some(prev) => self.smoothing * prev + (1.0 - self.smoothing) * raw,
        };
        self.value = Some(next);
        next
    }

    /// Forget the stored value; the next update re-anchors at its input
    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// Cap the per-step change of a value regardless of the target it is
/// chasing. `None` previous passes the proposal through unchanged.
pub fn clamp_delta(prev: Option<f32>, proposed: f32, max_delta: f32) -> f32 {
    match prev {
        None => proposed,
        Some(prev) => {
            let delta = proposed - prev;
            if delta > max_delta {
                prev + max_delta
            } else if delta < -max_delta {
                prev - max_delta
            } else {
                proposed
            }
        }
    }
}

/// Turns raw tracking samples into committed rotation/scale state.
///
/// Two smoothing stages per control axis: one on the raw sample, one on the
/// derived target, then a bounded-delta commit against the object's current
/// state. Without a sample the pipeline commits nothing; it never invents a
/// target.
#[derive(Debug, Clone)]
pub struct ControlPipeline {
    hand_x: Smoother,
    hand_y: Smoother,
    pinch: Smoother,
    rotation_x: Smoother,
    rotation_y: Smoother,
    scale: Smoother,
    base_scale: f32,
}

impl ControlPipeline {
    /// `max_coord` is the mesh's largest absolute vertex coordinate
    pub fn new(max_coord: f32) -> Self {
        Self {
            hand_x: Smoother::new(HAND_POSITION_SMOOTHING),
            hand_y: Smoother::new(HAND_POSITION_SMOOTHING),
            pinch: Smoother::new(PINCH_SMOOTHING),
            rotation_x: Smoother::new(ROTATION_SMOOTHING),
            rotation_y: Smoother::new(ROTATION_SMOOTHING),
            scale: Smoother::new(SCALE_SMOOTHING),
            base_scale: PIPELINE_TARGET_EXTENT / max_coord.max(1.0),
        }
    }

    /// Feed one tracking sample through both smoothing stages and commit the
    /// clamped result onto the object.
    pub fn apply(&mut self, sample: &HandSample, object: &mut MeshObject) {
        let hand_x = self.hand_x.update(sample.index_tip[0]);
        let hand_y = self.hand_y.update(sample.index_tip[1]);
        let pinch = self.pinch.update(sample.pinch_distance());

        let target_rotation_y = (hand_x - 0.5) * 3.0;
        let target_rotation_x = (hand_y - 0.5) * 3.0;
        let target_scale = (0.5 + pinch * 6.0) * self.base_scale;

        let rotation_x = self.rotation_x.update(target_rotation_x);
        let rotation_y = self.rotation_y.update(target_rotation_y);
        let scale = self.scale.update(target_scale);

        // Limits apply to the committed state, not the smoothed target
        object.rotation.x = clamp_delta(Some(object.rotation.x), rotation_x, MAX_ROTATION_STEP);
        object.rotation.y = clamp_delta(Some(object.rotation.y), rotation_y, MAX_ROTATION_STEP);
        object.scale = clamp_delta(Some(object.scale), scale, MAX_SCALE_STEP);
    }

    /// Clear all six smoothing stages so the next sample re-anchors instantly
    pub fn reset(&mut self) {
        self.hand_x.reset();
        self.hand_y.reset();
        self.pinch.reset();
        self.rotation_x.reset();
        self.rotation_y.reset();
        self.scale.reset();
    }
}
