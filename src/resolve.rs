//! Minimum push-out distances for rectangular tile shapes.

use macroquad::math::{Rect, Vec2};

use crate::catalog::CollisionShape;
use crate::intersect::rect_overlap;

/// Axis along which a penetration depth is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Push out left or right.
    Horizontal,
    /// Push out up or down.
    Vertical,
}

/// Smallest distance the AABB must move along `axis` to stop overlapping a
/// rect-shaped tile.
///
/// Returns 0 when the shapes do not overlap. `Polygon` and `None` shapes
/// always resolve to 0; the external resolver treats them as pass-through
/// on this path.
pub fn penetration_depth(
    aabb: &Rect,
    shape: &CollisionShape,
    tile_origin: Vec2,
    tile_size: f32,
    axis: Axis,
) -> f32 {
    let CollisionShape::Rect(r) = shape else {
        return 0.0;
    };
    let world = r.to_world(tile_origin, tile_size);
    if !rect_overlap(aabb, &world) {
        return 0.0;
    }
    match axis {
        Axis::Horizontal => {
            let push_left = aabb.x + aabb.w - world.x;
            let push_right = world.x + world.w - aabb.x;
            push_left.min(push_right)
        }
        Axis::Vertical => {
            let push_up = aabb.y + aabb.h - world.y;
            let push_down = world.y + world.h - aabb.y;
            push_up.min(push_down)
        }
    }
}
