use anyhow::{bail, Result};
use glam::Vec3;

/// Reference geometry in object-local coordinates: vertices, polygonal faces
/// (vertex index lists) and one base color per face.
///
/// Faces are triangles in the built-in data but any polygon with at least
/// three indices is accepted. A face may reference an out-of-range vertex;
/// such faces survive construction and are skipped (and counted) by the
/// renderer. A color table that doesn't match the face count is rejected
/// outright, since no later stage could make sense of it.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
    face_colors: Vec<[u8; 3]>,
}

impl Mesh {
    pub fn new(
        vertices: Vec<Vec3>,
        faces: Vec<Vec<usize>>,
        face_colors: Vec<[u8; 3]>,
    ) -> Result<Self> {
        if face_colors.len() != faces.len() {
            bail!(
                "face color table has {} entries for {} faces",
                face_colors.len(),
                faces.len()
            );
        }

        Ok(Self {
            vertices,
            faces,
            face_colors,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    pub fn face_colors(&self) -> &[[u8; 3]] {
        &self.face_colors
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Largest absolute vertex coordinate, used to normalize the on-screen
    /// size of meshes authored in arbitrary units. Zero for an empty mesh.
    pub fn max_abs_coord(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.abs().max_element())
            .fold(0.0, f32::max)
    }
}
