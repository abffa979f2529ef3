//! The static tile-type table: categories, shapes and the id-keyed lookup.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;
use crate::geom::{NormalizedPoint, NormalizedRect};

/// Identifier of a tile type within a catalog.
pub type TileTypeId = u16;

/// Collision behavior class of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileCategory {
    /// Blocks movement.
    Solid,
    /// Damages the actor on contact.
    Hazard,
    /// Collected on contact.
    Pickup,
    /// Fires game logic on contact, never blocks.
    Trigger,
    /// One-way platform, collidable from above only. Rect shapes only.
    Platform,
    /// Purely visual, ignored by every query.
    Decoration,
}

/// Collision footprint of a tile in tile-local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CollisionShape {
    /// No collision.
    None,
    /// Axis-aligned sub-rectangle of the tile.
    Rect(NormalizedRect),
    /// Convex polygon, at least 3 vertices, consistent winding.
    Polygon {
        /// Vertices in tile-local coordinates.
        points: Vec<NormalizedPoint>,
    },
}

impl CollisionShape {
    /// The full tile block.
    pub fn full() -> Self {
        CollisionShape::Rect(NormalizedRect::unit())
    }

    /// Upper half block.
    pub fn half_top() -> Self {
        CollisionShape::Rect(NormalizedRect::new(0.0, 0.0, 1.0, 0.5))
    }

    /// Lower half block.
    pub fn half_bottom() -> Self {
        CollisionShape::Rect(NormalizedRect::new(0.0, 0.5, 1.0, 0.5))
    }

    /// Left half block.
    pub fn half_left() -> Self {
        CollisionShape::Rect(NormalizedRect::new(0.0, 0.0, 0.5, 1.0))
    }

    /// Right half block.
    pub fn half_right() -> Self {
        CollisionShape::Rect(NormalizedRect::new(0.5, 0.0, 0.5, 1.0))
    }

    /// Quarter block sitting on the floor, left side.
    pub fn quarter_bottom_left() -> Self {
        CollisionShape::Rect(NormalizedRect::new(0.0, 0.5, 0.5, 0.5))
    }

    /// Quarter block sitting on the floor, right side.
    pub fn quarter_bottom_right() -> Self {
        CollisionShape::Rect(NormalizedRect::new(0.5, 0.5, 0.5, 0.5))
    }

    /// Slope ascending toward the tile's right edge.
    pub fn slope_up_right() -> Self {
        CollisionShape::Polygon {
            points: vec![
                NormalizedPoint::new(0.0, 1.0),
                NormalizedPoint::new(1.0, 0.0),
                NormalizedPoint::new(1.0, 1.0),
            ],
        }
    }

    /// Slope ascending toward the tile's left edge.
    pub fn slope_up_left() -> Self {
        CollisionShape::Polygon {
            points: vec![
                NormalizedPoint::new(0.0, 0.0),
                NormalizedPoint::new(1.0, 1.0),
                NormalizedPoint::new(0.0, 1.0),
            ],
        }
    }

    /// Whether this shape participates in collision at all.
    pub fn has_collision(&self) -> bool {
        !matches!(self, CollisionShape::None)
    }
}

/// An immutable tile definition: id, behavior category and collision footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileType {
    /// Catalog-unique id, the value a grid lookup returns.
    pub id: TileTypeId,
    /// Behavior class.
    pub category: TileCategory,
    /// Collision footprint.
    pub shape: CollisionShape,
}

#[derive(Deserialize)]
struct CatalogDoc {
    tiles: Vec<TileType>,
}

/// Static tile-type table, dense-indexed by id.
///
/// Built once by the loader and passed explicitly to every query. Lookups
/// are total: an unknown id resolves to [`CollisionShape::None`] and
/// [`TileCategory::Decoration`], so a query against it degrades to
/// "no collision". Catching unknown ids up front is the loader's job, see
/// [`TileCatalog::validate_ids`].
#[derive(Debug, Clone)]
pub struct TileCatalog {
    types: Vec<Option<TileType>>,
}

impl TileCatalog {
    /// Builds and validates a catalog from tile definitions.
    pub fn new(tiles: Vec<TileType>) -> Result<Self, Error> {
        let max_id = tiles.iter().map(|t| t.id).max().unwrap_or(0);
        let mut types: Vec<Option<TileType>> = vec![None; max_id as usize + 1];
        for tile in tiles {
            validate_tile(&tile)?;
            let slot = &mut types[tile.id as usize];
            if slot.is_some() {
                return Err(Error::DuplicateTileType(tile.id));
            }
            *slot = Some(tile);
        }
        Ok(TileCatalog { types })
    }

    /// Parses a `{"tiles": [...]}` JSON document and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        Self::new(doc.tiles)
    }

    /// Loads a catalog JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("Reading tile catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&txt)
            .with_context(|| format!("Parsing tile catalog {}", path.display()))?;
        log::debug!(
            "loaded tile catalog: {} types from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The tile definition for `id`, if the catalog knows it.
    pub fn get(&self, id: TileTypeId) -> Option<&TileType> {
        self.types.get(id as usize).and_then(|slot| slot.as_ref())
    }

    /// Collision footprint of `id`; [`CollisionShape::None`] for unknown ids.
    #[inline]
    pub fn shape_of(&self, id: TileTypeId) -> &CollisionShape {
        self.get(id).map(|t| &t.shape).unwrap_or(&CollisionShape::None)
    }

    /// Behavior class of `id`; [`TileCategory::Decoration`] for unknown ids.
    #[inline]
    pub fn category_of(&self, id: TileTypeId) -> TileCategory {
        self.get(id)
            .map(|t| t.category)
            .unwrap_or(TileCategory::Decoration)
    }

    /// Whether `id` is defined.
    pub fn contains(&self, id: TileTypeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of defined tile types.
    pub fn len(&self) -> usize {
        self.types.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether the catalog defines no tile types.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks every placed tile id against the catalog.
    ///
    /// Level loaders call this before the first query runs; the queries
    /// themselves never validate ids.
    pub fn validate_ids(&self, ids: impl IntoIterator<Item = TileTypeId>) -> Result<(), Error> {
        for id in ids {
            if !self.contains(id) {
                return Err(Error::UnknownTileType(id));
            }
        }
        Ok(())
    }
}

fn validate_tile(tile: &TileType) -> Result<(), Error> {
    match &tile.shape {
        CollisionShape::None => {}
        CollisionShape::Rect(r) => {
            if !r.in_unit_range() {
                return Err(Error::ShapeOutOfRange(tile.id));
            }
        }
        CollisionShape::Polygon { points } => {
            if points.len() < 3 {
                return Err(Error::DegeneratePolygon(tile.id));
            }
            if points.iter().any(|p| !p.in_unit_range()) {
                return Err(Error::ShapeOutOfRange(tile.id));
            }
        }
    }
    if tile.category == TileCategory::Platform && !matches!(tile.shape, CollisionShape::Rect(_)) {
        return Err(Error::UnsupportedPlatformShape(tile.id));
    }
    Ok(())
}
