//! Tile grid queries restricted to the cell span an AABB covers.

use macroquad::math::{vec2, Rect, Vec2};

use crate::catalog::{TileCatalog, TileCategory, TileTypeId};
use crate::intersect::shape_overlap;

/// Collaborator-owned tile storage seen through a cell lookup.
pub trait TileLookup {
    /// Tile type placed at `(col, row)`, or `None` for an empty cell.
    fn tile_at(&self, col: u32, row: u32) -> Option<TileTypeId>;
}

impl<F> TileLookup for F
where
    F: Fn(u32, u32) -> Option<TileTypeId>,
{
    fn tile_at(&self, col: u32, row: u32) -> Option<TileTypeId> {
        self(col, row)
    }
}

/// A tile matched by a grid query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileHit {
    /// Tile type at the matched cell.
    pub id: TileTypeId,
    /// Cell column.
    pub col: u32,
    /// Cell row.
    pub row: u32,
    /// World position of the cell's top-left corner.
    pub origin: Vec2,
}

/// Inclusive cell span `[col0..=col1] x [row0..=row1]` the AABB's bounds
/// cover, clamped to the grid. `None` when the AABB lies entirely outside.
pub(crate) fn cell_span(
    aabb: &Rect,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
) -> Option<(u32, u32, u32, u32)> {
    if grid_width == 0 || grid_height == 0 || tile_size <= 0.0 {
        return None;
    }
    let col0 = (aabb.x / tile_size).floor() as i64;
    let col1 = ((aabb.x + aabb.w) / tile_size).ceil() as i64;
    let row0 = (aabb.y / tile_size).floor() as i64;
    let row1 = ((aabb.y + aabb.h) / tile_size).ceil() as i64;
    if col1 < 0 || row1 < 0 || col0 >= grid_width as i64 || row0 >= grid_height as i64 {
        return None;
    }
    Some((
        col0.max(0) as u32,
        row0.max(0) as u32,
        col1.min(grid_width as i64 - 1) as u32,
        row1.min(grid_height as i64 - 1) as u32,
    ))
}

/// Every tile in the AABB's cell span whose category passes `filter` and
/// whose shape overlaps the AABB, in row-major scan order.
pub fn tile_collisions<L, F>(
    aabb: &Rect,
    tiles: &L,
    catalog: &TileCatalog,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
    filter: F,
) -> Vec<TileHit>
where
    L: TileLookup + ?Sized,
    F: Fn(TileCategory) -> bool,
{
    let mut hits = Vec::new();
    let Some((col0, row0, col1, row1)) = cell_span(aabb, grid_width, grid_height, tile_size)
    else {
        return hits;
    };
    for row in row0..=row1 {
        for col in col0..=col1 {
            let Some(id) = tiles.tile_at(col, row) else {
                continue;
            };
            if !filter(catalog.category_of(id)) {
                continue;
            }
            let origin = vec2(col as f32 * tile_size, row as f32 * tile_size);
            if shape_overlap(aabb, catalog.shape_of(id), origin, tile_size) {
                hits.push(TileHit { id, col, row, origin });
            }
        }
    }
    hits
}

/// First match in row-major scan order; early exit for existence checks.
pub(crate) fn first_tile_collision<L, F>(
    aabb: &Rect,
    tiles: &L,
    catalog: &TileCatalog,
    grid_width: u32,
    grid_height: u32,
    tile_size: f32,
    filter: F,
) -> Option<TileHit>
where
    L: TileLookup + ?Sized,
    F: Fn(TileCategory) -> bool,
{
    let (col0, row0, col1, row1) = cell_span(aabb, grid_width, grid_height, tile_size)?;
    for row in row0..=row1 {
        for col in col0..=col1 {
            let Some(id) = tiles.tile_at(col, row) else {
                continue;
            };
            if !filter(catalog.category_of(id)) {
                continue;
            }
            let origin = vec2(col as f32 * tile_size, row as f32 * tile_size);
            if shape_overlap(aabb, catalog.shape_of(id), origin, tile_size) {
                return Some(TileHit { id, col, row, origin });
            }
        }
    }
    None
}
