//! Tile-local normalized geometry and world-space conversion.

use macroquad::math::{vec2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Tolerance below which two intervals count as touching, not overlapping.
///
/// An actor resting flush against a tile edge shares a zero-area boundary
/// with it; that contact must not report a collision.
pub const CONTACT_EPS: f32 = 1e-4;

/// A point in tile-local space, both coordinates in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal coordinate, 0 at the tile's left edge.
    pub x: f32,
    /// Vertical coordinate, 0 at the tile's top edge.
    pub y: f32,
}

impl NormalizedPoint {
    /// Point from normalized coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        NormalizedPoint { x, y }
    }

    /// Scales the point into world pixels relative to a tile origin.
    #[inline]
    pub fn to_world(&self, tile_origin: Vec2, tile_size: f32) -> Vec2 {
        tile_origin + vec2(self.x, self.y) * tile_size
    }

    pub(crate) fn in_unit_range(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// A rectangle in tile-local space, all fields in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width, always positive.
    pub w: f32,
    /// Height, always positive.
    pub h: f32,
}

impl NormalizedRect {
    /// Rect from normalized position and extents.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        NormalizedRect { x, y, w, h }
    }

    /// The full tile: `{0, 0, 1, 1}`.
    pub fn unit() -> Self {
        NormalizedRect::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Scales the rect into world pixels relative to a tile origin.
    #[inline]
    pub fn to_world(&self, tile_origin: Vec2, tile_size: f32) -> Rect {
        Rect::new(
            tile_origin.x + self.x * tile_size,
            tile_origin.y + self.y * tile_size,
            self.w * tile_size,
            self.h * tile_size,
        )
    }

    pub(crate) fn in_unit_range(&self) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.w <= 1.0
            && self.y + self.h <= 1.0
    }
}
