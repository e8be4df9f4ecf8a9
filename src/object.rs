use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::transform::{project, rotate_scale, ProjectedVertex};

/// On-screen size (in mesh units before projection) the largest vertex
/// coordinate is normalized to at startup.
pub const INITIAL_TARGET_EXTENT: f32 = 220.0;

/// A mesh placed in the scene: shared reference geometry plus the mutable
/// per-instance state the control pipeline drives.
///
/// Rotation angles are radians, unbounded and accumulating; the anchor is the
/// screen point the object's local origin projects onto.
#[derive(Debug, Clone)]
pub struct MeshObject {
    mesh: Arc<Mesh>,
    pub rotation: Vec3,
    pub scale: f32,
    pub anchor: Vec2,
}

impl MeshObject {
    pub fn new(mesh: Arc<Mesh>, anchor: Vec2) -> Self {
        let max_coord = mesh.max_abs_coord();
        let scale = if max_coord > 0.0 {
            INITIAL_TARGET_EXTENT / max_coord
        } else {
            1.0
        };

        Self {
            mesh,
            rotation: Vec3::ZERO,
            scale,
            anchor,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Run the instance through the transform/projection pipeline
    pub fn projected_vertices(&self) -> Vec<ProjectedVertex> {
        let rotated = rotate_scale(self.mesh.vertices(), self.rotation, self.scale);
        project(&rotated, self.anchor)
    }
}
