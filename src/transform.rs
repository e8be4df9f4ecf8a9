use glam::{Mat3, Vec2, Vec3};

/// Pinhole focal length in pixels
pub const FOV: f32 = 500.0;
/// Distance from the virtual camera to the object-space origin
pub const VIEWER_DISTANCE: f32 = 500.0;

/// A vertex after projection: screen position plus the positive camera-space
/// depth used for painter's ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Rotate every vertex about X, then Y, then Z, then apply uniform scale.
///
/// The axis order is load-bearing: the three rotations don't commute, and the
/// motion on screen depends on each rotation being applied to the output of
/// the previous one.
pub fn rotate_scale(vertices: &[Vec3], rotation: Vec3, scale: f32) -> Vec<Vec3> {
    let m = Mat3::from_rotation_z(rotation.z)
        * Mat3::from_rotation_y(rotation.y)
        * Mat3::from_rotation_x(rotation.x);

    vertices.iter().map(|&v| m * v * scale).collect()
}

/// Perspective-project camera-space points onto the screen around an anchor.
///
/// A point at or behind the camera plane collapses onto the anchor with a
/// depth of 1 so it sorts in front of everything instead of blowing up the
/// perspective divide. That is a visual defect, not an error.
pub fn project(points: &[Vec3], anchor: Vec2) -> Vec<ProjectedVertex> {
    points
        .iter()
        .map(|p| {
            let z = p.z + VIEWER_DISTANCE;
            if z > 0.0 {
                let factor = FOV / z;
                ProjectedVertex {
                    x: p.x * factor + anchor.x,
                    y: p.y * factor + anchor.y,
                    depth: z,
                }
            } else {
                ProjectedVertex {
                    x: anchor.x,
                    y: anchor.y,
                    depth: 1.0,
                }
            }
        })
        .collect()
}
