//! Category-aware collision queries for the physics pass.

use macroquad::math::Rect;

use crate::catalog::{CollisionShape, TileCatalog, TileCategory};
use crate::grid::{first_tile_collision, tile_collisions, TileHit, TileLookup};

/// Vertical slack, in pixels, when deciding whether the previous-frame
/// bottom edge cleared a platform's top surface.
pub const PLATFORM_TOLERANCE: f32 = 2.0;

/// Whether any solid tile overlaps the AABB.
pub fn solid_collision<L>(
    aabb: &Rect,
    tiles: &L,
    catalog: &TileCatalog,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
) -> bool
where
    L: TileLookup + ?Sized,
{
    first_tile_collision(aabb, tiles, catalog, grid_width, grid_height, tile_size, |c| {
        c == TileCategory::Solid
    })
    .is_some()
}

/// First hazard tile overlapping the AABB, in row-major scan order.
pub fn hazard_collision<L>(
    aabb: &Rect,
    tiles: &L,
    catalog: &TileCatalog,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
) -> Option<TileHit>
where
    L: TileLookup + ?Sized,
{
    first_tile_collision(aabb, tiles, catalog, grid_width, grid_height, tile_size, |c| {
        c == TileCategory::Hazard
    })
}

/// Every pickup tile overlapping the AABB, so one frame can collect several.
pub fn pickup_collision<L>(
    aabb: &Rect,
    tiles: &L,
    catalog: &TileCatalog,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
) -> Vec<TileHit>
where
    L: TileLookup + ?Sized,
{
    tile_collisions(aabb, tiles, catalog, grid_width, grid_height, tile_size, |c| {
        c == TileCategory::Pickup
    })
}

/// One-way platform test against the previous frame's vertical position.
///
/// A platform only catches an actor falling onto it from above: no hit
/// unless the AABB moved down since the last frame, and only when the
/// previous bottom edge was at-or-above the platform's top surface within
/// [`PLATFORM_TOLERANCE`]. Approaching from below, from the side, or
/// resting in place never registers.
pub fn platform_collision<L>(
    aabb: &Rect,
    previous_y: f32,
    tiles: &L,
    catalog: &TileCatalog,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
) -> Option<TileHit>
where
    L: TileLookup + ?Sized,
{
    if aabb.y <= previous_y {
        return None;
    }
    let previous_bottom = previous_y + aabb.h;
    let hits = tile_collisions(aabb, tiles, catalog, grid_width, grid_height, tile_size, |c| {
        c == TileCategory::Platform
    });
    for hit in hits {
        // Platforms are rect-only; anything else degrades to no collision.
        let CollisionShape::Rect(r) = catalog.shape_of(hit.id) else {
            continue;
        };
        let surface = hit.origin.y + r.y * tile_size;
        if previous_bottom <= surface + PLATFORM_TOLERANCE {
            return Some(hit);
        }
    }
    None
}
