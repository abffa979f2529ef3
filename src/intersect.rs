//! AABB–shape intersection tests: rect fast path and SAT polygon path.

use macroquad::math::{vec2, Rect, Vec2};

use crate::catalog::CollisionShape;
use crate::geom::{NormalizedPoint, CONTACT_EPS};

/// Squared edge length below which an edge is skipped as degenerate.
const DEGENERATE_EDGE_EPS: f32 = 1e-8;

/// Strict interval overlap on both axes.
///
/// Exactly-touching edges (shared boundary, zero-area intersection) do not
/// count as overlap.
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x + a.w > b.x + CONTACT_EPS
        && b.x + b.w > a.x + CONTACT_EPS
        && a.y + a.h > b.y + CONTACT_EPS
        && b.y + b.h > a.y + CONTACT_EPS
}

/// SAT overlap test between a world-space AABB and a convex tile polygon.
///
/// Vertices are scaled into world space (`tile_origin + vertex * tile_size`)
/// and the AABB is treated as a 4-vertex polygon. A polygon with fewer than
/// 3 vertices is malformed content and reports no collision.
pub fn polygon_overlap(
    aabb: &Rect,
    points: &[NormalizedPoint],
    tile_origin: Vec2,
    tile_size: f32,
) -> bool {
    if points.len() < 3 {
        return false;
    }

    let world: Vec<Vec2> = points
        .iter()
        .map(|p| p.to_world(tile_origin, tile_size))
        .collect();
    let corners = [
        vec2(aabb.x, aabb.y),
        vec2(aabb.x + aabb.w, aabb.y),
        vec2(aabb.x + aabb.w, aabb.y + aabb.h),
        vec2(aabb.x, aabb.y + aabb.h),
    ];

    // A gap on any edge normal of either polygon proves separation.
    !has_separating_axis(&corners, &corners, &world)
        && !has_separating_axis(&world, &corners, &world)
}

/// Tests every edge normal of `edge_owner` as a candidate separating axis.
fn has_separating_axis(edge_owner: &[Vec2], a: &[Vec2], b: &[Vec2]) -> bool {
    let n = edge_owner.len();
    for i in 0..n {
        let edge = edge_owner[(i + 1) % n] - edge_owner[i];
        if edge.length_squared() < DEGENERATE_EDGE_EPS {
            continue;
        }
        let axis = vec2(-edge.y, edge.x);
        let (a_min, a_max) = project(axis, a);
        let (b_min, b_max) = project(axis, b);
        if a_max <= b_min + CONTACT_EPS || b_max <= a_min + CONTACT_EPS {
            return true;
        }
    }
    false
}

fn project(axis: Vec2, verts: &[Vec2]) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for v in verts {
        let d = axis.dot(*v);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Dispatches an AABB-vs-tile-shape test by shape tag.
pub fn shape_overlap(
    aabb: &Rect,
    shape: &CollisionShape,
    tile_origin: Vec2,
    tile_size: f32,
) -> bool {
    match shape {
        CollisionShape::None => false,
        CollisionShape::Rect(r) => rect_overlap(aabb, &r.to_world(tile_origin, tile_size)),
        CollisionShape::Polygon { points } => {
            polygon_overlap(aabb, points, tile_origin, tile_size)
        }
    }
}
