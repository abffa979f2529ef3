#![warn(missing_docs)]

//! Partial-coverage tile collision & sprite hitbox extraction for Macroquad
//! platformers.
//!
//! Tiles contribute a partial-coverage footprint (full block, half block,
//! slope, quarter block) instead of a uniform square. An actor AABB collides
//! against them through a strict rect fast path and a SAT polygon path,
//! category-aware grid queries (solid/hazard/pickup/one-way-platform) and
//! minimum push-out resolution. Sprite hitboxes are derived from the alpha
//! channel by marching-squares contour tracing with Ramer-Douglas-Peucker
//! simplification, or by the cheaper rect and compound-rect modes.
//!
//! All queries are pure functions over explicit inputs: the caller owns the
//! grid, the tile catalog and the actor position, and drives one query pass
//! per tick.

mod catalog;
mod classify;
mod error;
mod geom;
mod grid;
mod hitbox {
    pub mod extract;
    pub mod mask;
    pub mod simplify;
    pub mod trace;
}
mod intersect;
mod resolve;

pub use catalog::{CollisionShape, TileCatalog, TileCategory, TileType, TileTypeId};
pub use classify::{
    hazard_collision, pickup_collision, platform_collision, solid_collision, PLATFORM_TOLERANCE,
};
pub use error::Error;
pub use geom::{NormalizedPoint, NormalizedRect, CONTACT_EPS};
pub use grid::{tile_collisions, TileHit, TileLookup};
pub use hitbox::extract::{
    extract_compound, extract_polygon, extract_rect, HitboxDefinition, MAX_COMPOUND_BANDS,
};
pub use hitbox::mask::{AlphaMask, DEFAULT_ALPHA_THRESHOLD};
pub use hitbox::simplify::{simplify, DEFAULT_SIMPLIFY_EPSILON};
pub use intersect::{polygon_overlap, rect_overlap, shape_overlap};
pub use resolve::{penetration_depth, Axis};
