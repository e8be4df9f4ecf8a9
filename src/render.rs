use std::cmp::Ordering;
use std::collections::HashSet;

use crate::core::canvas::Canvas;
use crate::object::MeshObject;

/// Wireframe hue: (0, 140 + 25 * thickness, 255), drawn at thickness 2 then 1
const EDGE_GREEN_BASE: i32 = 140;
const EDGE_GREEN_STEP: i32 = 25;
/// Vertex marker color and radius
const MARKER_COLOR: [u8; 3] = [200, 255, 255];
const MARKER_RADIUS: u32 = 2;

/// Per-frame rasterizer counters. Malformed faces are skipped, never fatal,
/// and the skips stay observable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces_filled: usize,
    pub faces_skipped: usize,
    pub edges_drawn: usize,
}

/// Stable back-to-front ordering: indices into `depths`, farthest first.
/// Ties keep their original relative order.
pub fn painter_order(depths: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..depths.len()).collect();
    order.sort_by(|&a, &b| depths[b].partial_cmp(&depths[a]).unwrap_or(Ordering::Equal));
    order
}

/// Depth tint for a face: nearer faces render brighter, clamped so nothing
/// blows out or goes fully dark.
fn depth_factor(z_avg: f32) -> f32 {
    (700.0 / (z_avg + 1.0)).clamp(0.5, 1.2)
}

fn tint_channel(base: u8, factor: f32) -> u8 {
    ((base as f32 * factor) as i32).clamp(0, 255) as u8
}

/// Draw a mesh instance with the painter's algorithm: depth-sorted flat face
/// fills, then deduplicated wireframe edges, then vertex markers.
///
/// Face fills tolerate points up to one viewport beyond the screen edge so
/// partially visible faces still fill; edges and markers require strictly
/// in-viewport endpoints. The asymmetry is intentional.
pub fn draw_object(canvas: &mut Canvas, object: &MeshObject) -> RenderStats {
    let mut stats = RenderStats::default();

    let mesh = object.mesh();
    if mesh.vertex_count() == 0 {
        return stats;
    }

    let projected = object.projected_vertices();
    let (width, height) = canvas.dimensions();
    let (w, h) = (width as i32, height as i32);

    // Depth pass over index-valid faces
    let mut visible: Vec<(usize, f32)> = Vec::with_capacity(mesh.face_count());
    for (face_idx, face) in mesh.faces().iter().enumerate() {
        if face.len() >= 3 && face.iter().all(|&i| i < projected.len()) {
            let sum: f32 = face.iter().map(|&i| projected[i].depth).sum();
            visible.push((face_idx, sum / face.len() as f32));
        } else {
            stats.faces_skipped += 1;
        }
    }

    let depths: Vec<f32> = visible.iter().map(|&(_, depth)| depth).collect();

    // Fill pass, farthest face first
    let mut points: Vec<(i32, i32)> = Vec::new();
    for &slot in &painter_order(&depths) {
        let (face_idx, z_avg) = visible[slot];

        points.clear();
        for &i in &mesh.faces()[face_idx] {
            let x = projected[i].x as i32;
            let y = projected[i].y as i32;
            // Generous off-screen tolerance: up to twice the viewport
            if x >= 0 && x < w * 2 && y >= 0 && y < h * 2 {
                points.push((x, y));
            }
        }

        if points.len() >= 3 {
            let base = mesh.face_colors()[face_idx];
            let factor = depth_factor(z_avg);
            canvas.fill_polygon(
                &points,
                tint_channel(base[0], factor),
                tint_channel(base[1], factor),
                tint_channel(base[2], factor),
                255,
            );
            stats.faces_filled += 1;
        } else {
            stats.faces_skipped += 1;
        }
    }

    // Wireframe pass: each undirected edge at most once, both endpoints
    // strictly inside the viewport
    let mut drawn_edges: HashSet<(usize, usize)> = HashSet::new();
    for face in mesh.faces() {
        if face.iter().any(|&i| i >= projected.len()) {
            continue;
        }

        for i in 0..face.len() {
            let v1 = face[i];
            let v2 = face[(i + 1) % face.len()];
            let edge = (v1.min(v2), v1.max(v2));

            if !drawn_edges.insert(edge) {
                continue;
            }

            let (x1, y1) = (projected[v1].x as i32, projected[v1].y as i32);
            let (x2, y2) = (projected[v2].x as i32, projected[v2].y as i32);

            let inside = |x: i32, y: i32| x >= 0 && x < w && y >= 0 && y < h;
            if inside(x1, y1) && inside(x2, y2) {
                // Two passes fake a highlighted anti-aliased edge
                for thickness in (1..=2u32).rev() {
                    let green = (EDGE_GREEN_BASE + EDGE_GREEN_STEP * thickness as i32) as u8;
                    canvas.draw_line_thick(x1, y1, x2, y2, thickness, 0, green, 255, 255);
                }
                stats.edges_drawn += 1;
            }
        }
    }

    // Vertex markers
    for vertex in &projected {
        let (x, y) = (vertex.x as i32, vertex.y as i32);
        if x >= 0 && x < w && y >= 0 && y < h {
            canvas.fill_circle(
                x,
                y,
                MARKER_RADIUS,
                MARKER_COLOR[0],
                MARKER_COLOR[1],
                MARKER_COLOR[2],
                255,
            );
        }
    }

    stats
}
