// tests/resolve_tests.rs

use macroquad::math::{vec2, Rect};
use macroquad_tile_collision::{penetration_depth, Axis, CollisionShape, NormalizedRect};

const TILE_SIZE: f32 = 64.0;

#[test]
fn horizontal_depth_is_the_smaller_intrusion() {
    let shape = CollisionShape::full();
    let origin = vec2(64.0, 0.0);
    // Actor poking 8 px into the tile's left edge.
    let aabb = Rect::new(40.0, 8.0, 32.0, 32.0);
    let depth = penetration_depth(&aabb, &shape, origin, TILE_SIZE, Axis::Horizontal);
    assert!((depth - 8.0).abs() < 1e-5);
    // Vertical axis sees the full body height as intrusion from the top.
    let depth = penetration_depth(&aabb, &shape, origin, TILE_SIZE, Axis::Vertical);
    assert!((depth - 40.0).abs() < 1e-5);
}

#[test]
fn vertical_depth_on_a_half_block() {
    // Lower half block at the origin, top surface at y = 32.
    let shape = CollisionShape::half_bottom();
    let origin = vec2(0.0, 0.0);
    // Actor's feet 6 px below the surface.
    let aabb = Rect::new(8.0, 6.0, 24.0, 32.0);
    let depth = penetration_depth(&aabb, &shape, origin, TILE_SIZE, Axis::Vertical);
    assert!((depth - 6.0).abs() < 1e-5);
}

#[test]
fn separated_shapes_have_zero_depth() {
    let shape = CollisionShape::full();
    let aabb = Rect::new(200.0, 200.0, 32.0, 32.0);
    assert_eq!(
        penetration_depth(&aabb, &shape, vec2(0.0, 0.0), TILE_SIZE, Axis::Horizontal),
        0.0
    );
    // Exactly touching is already resolved.
    let touching = Rect::new(64.0, 0.0, 32.0, 32.0);
    assert_eq!(
        penetration_depth(&touching, &shape, vec2(0.0, 0.0), TILE_SIZE, Axis::Horizontal),
        0.0
    );
}

#[test]
fn polygon_and_empty_shapes_resolve_to_zero() {
    let aabb = Rect::new(8.0, 8.0, 32.0, 32.0);
    let origin = vec2(0.0, 0.0);
    assert_eq!(
        penetration_depth(&aabb, &CollisionShape::slope_up_right(), origin, TILE_SIZE, Axis::Vertical),
        0.0
    );
    assert_eq!(
        penetration_depth(&aabb, &CollisionShape::None, origin, TILE_SIZE, Axis::Vertical),
        0.0
    );
}

#[test]
fn sub_rect_shapes_measure_against_their_own_bounds() {
    // Quarter block in the lower-right corner: world rect (32, 32, 32, 32).
    let shape = CollisionShape::Rect(NormalizedRect::new(0.5, 0.5, 0.5, 0.5));
    let aabb = Rect::new(28.0, 40.0, 16.0, 16.0);
    let depth = penetration_depth(&aabb, &shape, vec2(0.0, 0.0), TILE_SIZE, Axis::Horizontal);
    // 12 px past the quarter's left edge, 52 px from its right: push left.
    assert!((depth - 12.0).abs() < 1e-5);
}
