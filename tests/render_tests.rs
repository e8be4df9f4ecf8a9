use space_navigator::core::Canvas;
use space_navigator::mesh::Mesh;
use space_navigator::object::MeshObject;
use space_navigator::render::{draw_object, painter_order};
use space_navigator::scene::Scene;
use space_navigator::transform::{project, rotate_scale};

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

fn single_triangle_mesh() -> Mesh {
    Mesh::new(
        vec![
            Vec3::new(-50.0, -40.0, 0.0),
            Vec3::new(60.0, -30.0, 0.0),
            Vec3::new(0.0, 55.0, 0.0),
        ],
        vec![vec![0, 1, 2]],
        vec![[120, 60, 200]],
    )
    .unwrap()
}

/// Triangle object with an explicit scale so the whole silhouette stays
/// inside a 400x300 viewport anchored at its center
fn unit_scale_triangle() -> MeshObject {
    let mut object = MeshObject::new(Arc::new(single_triangle_mesh()), Vec2::new(200.0, 150.0));
    object.scale = 1.0;
    object
}

// ============================================================================
// Transform / projection contracts
// ============================================================================

#[test]
fn test_rotation_order_contract() {
    let rotated = rotate_scale(&[Vec3::X], Vec3::new(0.0, FRAC_PI_2, 0.0), 1.0);

    assert!(rotated[0].x.abs() < 1e-5);
    assert!(rotated[0].y.abs() < 1e-5);
    assert!((rotated[0].z + 1.0).abs() < 1e-5);
}

#[test]
fn test_projection_of_origin_lands_on_anchor() {
    let projected = project(&[Vec3::ZERO], Vec2::new(600.0, 400.0));

    assert_eq!(projected[0].x, 600.0);
    assert_eq!(projected[0].y, 400.0);
    assert_eq!(projected[0].depth, 500.0);
}

#[test]
fn test_depth_sort_fill_order() {
    assert_eq!(painter_order(&[300.0, 100.0, 500.0]), vec![2, 0, 1]);
}

// ============================================================================
// Rasterizer behavior
// ============================================================================

#[test]
fn test_render_is_deterministic_under_constant_transform() {
    let mut object = unit_scale_triangle();
    object.rotation = Vec3::new(0.3, 0.7, 0.1);
    object.scale = 1.5;

    let mut first = Canvas::new(400, 300);
    let mut second = Canvas::new(400, 300);
    first.clear(5, 5, 15, 255);
    second.clear(5, 5, 15, 255);

    let stats_first = draw_object(&mut first, &object);
    let stats_second = draw_object(&mut second, &object);

    assert_eq!(stats_first, stats_second);
    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn test_triangle_renders_fill_edges_and_markers() {
    let object = unit_scale_triangle();

    let mut canvas = Canvas::new(400, 300);
    let stats = draw_object(&mut canvas, &object);

    assert_eq!(stats.faces_filled, 1);
    assert_eq!(stats.faces_skipped, 0);
    assert_eq!(stats.edges_drawn, 3);
    assert!(canvas.pixels().iter().any(|&byte| byte != 0));
}

#[test]
fn test_out_of_range_face_is_skipped_and_counted() {
    let mesh = Mesh::new(
        vec![
            Vec3::new(-50.0, -40.0, 0.0),
            Vec3::new(60.0, -30.0, 0.0),
            Vec3::new(0.0, 55.0, 0.0),
        ],
        vec![vec![0, 1, 2], vec![0, 1, 99]],
        vec![[120, 60, 200], [10, 10, 10]],
    )
    .unwrap();

    let mut object = MeshObject::new(Arc::new(mesh), Vec2::new(200.0, 150.0));
    object.scale = 1.0;

    let mut canvas = Canvas::new(400, 300);
    let stats = draw_object(&mut canvas, &object);

    assert_eq!(stats.faces_filled, 1);
    assert_eq!(stats.faces_skipped, 1);
}

#[test]
fn test_shared_edges_draw_once() {
    // Two triangles forming a quad share one edge: 5 unique edges
    let mesh = Mesh::new(
        vec![
            Vec3::new(-40.0, -40.0, 0.0),
            Vec3::new(40.0, -40.0, 0.0),
            Vec3::new(40.0, 40.0, 0.0),
            Vec3::new(-40.0, 40.0, 0.0),
        ],
        vec![vec![0, 1, 2], vec![0, 2, 3]],
        vec![[200, 0, 0], [0, 200, 0]],
    )
    .unwrap();

    let mut object = MeshObject::new(Arc::new(mesh), Vec2::new(200.0, 150.0));
    object.scale = 1.0;

    let mut canvas = Canvas::new(400, 300);
    let stats = draw_object(&mut canvas, &object);

    assert_eq!(stats.edges_drawn, 5);
}

#[test]
fn test_behind_camera_geometry_does_not_panic() {
    // Scaled far enough that rotated vertices end up behind the viewer plane
    let mut object = unit_scale_triangle();
    object.scale = 50.0;
    object.rotation = Vec3::new(FRAC_PI_2, 0.0, 0.0);

    let mut canvas = Canvas::new(400, 300);
    draw_object(&mut canvas, &object);
}

#[test]
fn test_empty_mesh_draws_nothing_but_scene_still_runs() {
    let mesh = Mesh::new(vec![], vec![], vec![]).unwrap();
    let mut scene = Scene::with_seeded_stars(mesh, 400, 300, 300, 9);
    let mut canvas = Canvas::new(400, 300);

    scene.advance(None);
    let stats = scene.draw(&mut canvas);

    assert_eq!(stats.faces_filled, 0);
    // Background cleared, starfield still rendered
    assert_eq!(&canvas.pixels()[0..3], &[5, 5, 15]);
    assert!(canvas
        .pixels()
        .chunks_exact(4)
        .any(|px| px[0] != 5 || px[1] != 5 || px[2] != 15));
}

#[test]
fn test_depth_tint_darkens_far_faces() {
    // Same triangle at two depths; past the tint clamp knee the farther
    // instance fills with darker pixels
    fn brightest_fill(z: f32) -> u8 {
        let mesh = Mesh::new(
            vec![
                Vec3::new(-50.0, -40.0, z),
                Vec3::new(60.0, -30.0, z),
                Vec3::new(0.0, 55.0, z),
            ],
            vec![vec![0, 1, 2]],
            vec![[200, 200, 200]],
        )
        .unwrap();

        let mut object = MeshObject::new(Arc::new(mesh), Vec2::new(200.0, 150.0));
        object.scale = 1.0;

        let mut canvas = Canvas::new(400, 300);
        draw_object(&mut canvas, &object);

        // Red channel of the brightest pixel; fill dominates since the
        // wireframe hue carries no red and markers stay at 200
        canvas
            .pixels()
            .chunks_exact(4)
            .map(|px| px[0])
            .max()
            .unwrap_or(0)
    }

    // Near face: depth 350, factor clamps to 1.2 -> 240
    // Far face: depth 650, factor ~1.08 -> 215
    assert!(brightest_fill(-150.0) > brightest_fill(150.0));
}
