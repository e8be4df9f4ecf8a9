use space_navigator::control::{
    clamp_delta, ControlPipeline, Smoother, MAX_ROTATION_STEP, MAX_SCALE_STEP,
};
use space_navigator::mesh::Mesh;
use space_navigator::meshes::create_spaceship_mesh;
use space_navigator::object::MeshObject;
use space_navigator::tracking::HandSample;

use glam::{Vec2, Vec3};
use std::sync::Arc;

fn centered_sample() -> HandSample {
    HandSample {
        index_tip: [0.5, 0.5],
        thumb_tip: [0.5, 0.5],
    }
}

fn spaceship_object() -> MeshObject {
    let mesh = Arc::new(create_spaceship_mesh().unwrap());
    MeshObject::new(mesh, Vec2::new(600.0, 400.0))
}

// ============================================================================
// Smoother
// ============================================================================

#[test]
fn test_smoother_first_value_passes_through() {
    let mut smoother = Smoother::new(0.85);
    assert_eq!(smoother.update(123.456), 123.456);
}

#[test]
fn test_smoother_exact_blend() {
    let mut smoother = Smoother::new(0.85);
    smoother.update(1.0);
    let second = smoother.update(2.0);

    assert_eq!(second, 0.85 * 1.0 + 0.15 * 2.0);
}

#[test]
fn test_smoother_converges_toward_constant_input() {
    let mut smoother = Smoother::new(0.8);
    smoother.update(0.0);

    let mut value = 0.0;
    for _ in 0..200 {
        value = smoother.update(10.0);
    }

    assert!((value - 10.0).abs() < 1e-3);
}

#[test]
fn test_smoother_reset_forgets_history() {
    let mut smoother = Smoother::new(0.9);
    for v in [5.0, 6.0, 7.0] {
        smoother.update(v);
    }

    smoother.reset();
    assert_eq!(smoother.update(42.0), 42.0);
}

// ============================================================================
// Rate limiter
// ============================================================================

#[test]
fn test_clamp_delta_caps_upward_jump() {
    assert_eq!(clamp_delta(Some(10.0), 10.5, 0.08), 10.08);
}

#[test]
fn test_clamp_delta_within_bound_passes_through() {
    assert_eq!(clamp_delta(Some(10.0), 9.9, 0.08), 9.9);
}

#[test]
fn test_clamp_delta_no_previous_passes_through() {
    assert_eq!(clamp_delta(None, 5.0, 0.08), 5.0);
}

#[test]
fn test_clamp_delta_is_sign_preserving() {
    assert_eq!(clamp_delta(Some(0.0), -1.0, 0.25), -0.25);
    assert_eq!(clamp_delta(Some(0.0), 1.0, 0.25), 0.25);
}

// ============================================================================
// Control pipeline
// ============================================================================

#[test]
fn test_pipeline_commit_is_rate_limited() {
    let mut object = spaceship_object();
    let mut pipeline = ControlPipeline::new(object.mesh().max_abs_coord());

    // Hand far to one side: a large rotation target, but the commit may only
    // move by the per-frame step
    let sample = HandSample {
        index_tip: [1.0, 1.0],
        thumb_tip: [1.0, 1.0],
    };

    let rotation_before = object.rotation;
    pipeline.apply(&sample, &mut object);

    assert!((object.rotation.x - rotation_before.x).abs() <= MAX_ROTATION_STEP + 1e-6);
    assert!((object.rotation.y - rotation_before.y).abs() <= MAX_ROTATION_STEP + 1e-6);
}

#[test]
fn test_pipeline_scale_commit_is_rate_limited() {
    let mut object = spaceship_object();
    let mut pipeline = ControlPipeline::new(object.mesh().max_abs_coord());

    // Wide pinch asks for a much larger scale than the current one
    let sample = HandSample {
        index_tip: [0.5, 0.5],
        thumb_tip: [1.0, 1.0],
    };

    let scale_before = object.scale;
    pipeline.apply(&sample, &mut object);

    assert!((object.scale - scale_before).abs() <= MAX_SCALE_STEP + 1e-6);
}

#[test]
fn test_pipeline_centered_hand_steers_rotation_toward_zero() {
    let mut object = spaceship_object();
    object.rotation = Vec3::new(1.0, -1.0, 0.0);
    let mut pipeline = ControlPipeline::new(object.mesh().max_abs_coord());

    // Centered hand means zero rotation target; many frames should walk the
    // committed rotation down to it
    for _ in 0..500 {
        pipeline.apply(&centered_sample(), &mut object);
    }

    assert!(object.rotation.x.abs() < 1e-2);
    assert!(object.rotation.y.abs() < 1e-2);
}

#[test]
fn test_pipeline_rotation_converges_to_target_mapping() {
    let mut object = spaceship_object();
    let mut pipeline = ControlPipeline::new(object.mesh().max_abs_coord());

    let sample = HandSample {
        index_tip: [0.75, 0.5],
        thumb_tip: [0.75, 0.5],
    };

    for _ in 0..1000 {
        pipeline.apply(&sample, &mut object);
    }

    // target_rotation_y = (0.75 - 0.5) * 3.0
    assert!((object.rotation.y - 0.75).abs() < 1e-3);
    assert!(object.rotation.x.abs() < 1e-3);
}

#[test]
fn test_pipeline_reset_reanchors_smoothing() {
    let mut object = spaceship_object();
    let mut pipeline = ControlPipeline::new(object.mesh().max_abs_coord());

    for _ in 0..50 {
        pipeline.apply(&centered_sample(), &mut object);
    }

    pipeline.reset();

    // After a reset the next sample anchors the smoothers directly at the new
    // hand position; the commit is still rate limited
    let far = HandSample {
        index_tip: [1.0, 0.5],
        thumb_tip: [1.0, 0.5],
    };
    let before = object.rotation.y;
    pipeline.apply(&far, &mut object);

    assert!((object.rotation.y - before).abs() <= MAX_ROTATION_STEP + 1e-6);
}

#[test]
fn test_pipeline_base_scale_uses_mesh_extent() {
    // A mesh twice as large gets half the base scale; drive both pipelines to
    // convergence and compare the committed scales
    let small = Mesh::new(vec![Vec3::new(100.0, 0.0, 0.0)], vec![], vec![]).unwrap();
    let large = Mesh::new(vec![Vec3::new(200.0, 0.0, 0.0)], vec![], vec![]).unwrap();

    let mut object_small = MeshObject::new(Arc::new(small), Vec2::ZERO);
    let mut object_large = MeshObject::new(Arc::new(large), Vec2::ZERO);

    let mut pipeline_small = ControlPipeline::new(object_small.mesh().max_abs_coord());
    let mut pipeline_large = ControlPipeline::new(object_large.mesh().max_abs_coord());

    let sample = HandSample {
        index_tip: [0.5, 0.5],
        thumb_tip: [0.6, 0.5],
    };

    for _ in 0..2000 {
        pipeline_small.apply(&sample, &mut object_small);
        pipeline_large.apply(&sample, &mut object_large);
    }

    assert!((object_small.scale - 2.0 * object_large.scale).abs() < 1e-2);
}
