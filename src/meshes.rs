use anyhow::Result;
use glam::Vec3;

use crate::mesh::Mesh;

/// Builds the demo spaceship hull: a faceted fuselage with swept wings, a
/// dorsal fin and twin engine pods. 30 vertices, 52 triangular faces.
pub fn create_spaceship_mesh() -> Result<Mesh> {
    let vertices = vec![
        // Nose tip and forward ring
        Vec3::new(0.0, 0.0, 120.0),
        Vec3::new(15.0, 8.0, 80.0),
        Vec3::new(-15.0, 8.0, 80.0),
        Vec3::new(15.0, -8.0, 80.0),
        Vec3::new(-15.0, -8.0, 80.0),
        // Forward hull ring
        Vec3::new(20.0, 10.0, 80.0),
        Vec3::new(-20.0, 10.0, 80.0),
        Vec3::new(20.0, -10.0, 80.0),
        Vec3::new(-20.0, -10.0, 80.0),
        // Rear hull ring
        Vec3::new(25.0, 12.0, -40.0),
        Vec3::new(-25.0, 12.0, -40.0),
        Vec3::new(25.0, -12.0, -40.0),
        Vec3::new(-25.0, -12.0, -40.0),
        // Tail point
        Vec3::new(0.0, 0.0, -80.0),
        // Right wing
        Vec3::new(40.0, 0.0, 40.0),
        Vec3::new(80.0, -10.0, 10.0),
        Vec3::new(70.0, -20.0, -20.0),
        // Left wing
        Vec3::new(-40.0, 0.0, 40.0),
        Vec3::new(-80.0, -10.0, 10.0),
        Vec3::new(-70.0, -20.0, -20.0),
        // Dorsal fin
        Vec3::new(0.0, 25.0, -20.0),
        Vec3::new(0.0, 18.0, -50.0),
        // Right engine pod
        Vec3::new(15.0, -8.0, -40.0),
        Vec3::new(15.0, 2.0, -40.0),
        Vec3::new(15.0, -8.0, -60.0),
        Vec3::new(15.0, 2.0, -60.0),
        // Left engine pod
        Vec3::new(-15.0, -8.0, -40.0),
        Vec3::new(-15.0, 2.0, -40.0),
        Vec3::new(-15.0, -8.0, -60.0),
        Vec3::new(-15.0, 2.0, -60.0),
    ];

    let faces: Vec<Vec<usize>> = vec![
        // Nose cone
        vec![0, 1, 2],
        vec![0, 3, 1],
        vec![0, 4, 3],
        vec![0, 2, 4],
        // Forward hull
        vec![1, 5, 6],
        vec![1, 6, 2],
        vec![3, 4, 8],
        vec![3, 8, 7],
        vec![1, 3, 7],
        vec![1, 7, 5],
        vec![2, 6, 8],
        vec![2, 8, 4],
        // Rear hull
        vec![5, 9, 10],
        vec![5, 10, 6],
        vec![7, 8, 12],
        vec![7, 12, 11],
        vec![5, 7, 11],
        vec![5, 11, 9],
        vec![6, 10, 12],
        vec![6, 12, 8],
        // Tail cap
        vec![9, 11, 13],
        vec![10, 13, 12],
        vec![9, 13, 10],
        vec![11, 12, 13],
        // Right wing
        vec![5, 14, 1],
        vec![5, 7, 14],
        vec![7, 16, 14],
        vec![7, 11, 16],
        vec![14, 15, 1],
        vec![14, 16, 15],
        // Left wing
        vec![6, 2, 17],
        vec![6, 17, 8],
        vec![8, 17, 19],
        vec![8, 19, 12],
        vec![17, 2, 18],
        vec![17, 18, 19],
        // Dorsal fin
        vec![10, 20, 21],
        vec![10, 21, 13],
        vec![9, 13, 21],
        vec![9, 21, 20],
        // Right engine pod
        vec![22, 23, 25],
        vec![22, 25, 24],
        vec![23, 9, 25],
        vec![9, 11, 25],
        vec![22, 24, 11],
        vec![22, 11, 7],
        // Left engine pod
        vec![26, 29, 27],
        vec![26, 28, 29],
        vec![27, 29, 10],
        vec![29, 12, 10],
        vec![26, 8, 28],
        vec![26, 7, 8],
    ];

    // Static per-face color table, grouped by hull section
    let face_colors: Vec<[u8; 3]> = [
        ([220, 220, 255], 4),  // nose cone
        ([80, 160, 255], 8),   // forward hull
        ([40, 120, 240], 12),  // rear hull and tail cap
        ([255, 120, 80], 12),  // wings
        ([200, 200, 80], 4),   // dorsal fin
        ([255, 180, 80], 12),  // engine pods
    ]
    .iter()
    .flat_map(|&(color, count)| std::iter::repeat(color).take(count))
    .collect();

    Mesh::new(vertices, faces, face_colors)
}
