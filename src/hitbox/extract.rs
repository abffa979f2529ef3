//! Sprite hitbox extraction: contour tracing, simplification and the rect
//! fallback modes.

use serde::{Deserialize, Serialize};

use super::mask::AlphaMask;
use super::simplify::simplify;
use super::trace::trace_contour;
use crate::geom::{NormalizedPoint, NormalizedRect};

/// Highest band count accepted by compound extraction.
pub const MAX_COMPOUND_BANDS: usize = 20;

/// A sprite's persisted collision shape.
///
/// Serialized as `{"type": "rect" | "polygon" | "compound", ...}` for
/// level/asset packs. Every extraction mode produces one of these; a sprite
/// with no usable content falls back to the unit rect, never to "no shape".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HitboxDefinition {
    /// Single normalized rectangle.
    Rect(NormalizedRect),
    /// Outline traced from the sprite's alpha channel.
    Polygon {
        /// Simplified contour vertices, normalized to `[0, 1]`.
        points: Vec<NormalizedPoint>,
    },
    /// Stack of horizontal band rectangles.
    Compound {
        /// Band rectangles, top to bottom, normalized to `[0, 1]`.
        rects: Vec<NormalizedRect>,
    },
}

impl HitboxDefinition {
    fn unit_rect() -> Self {
        HitboxDefinition::Rect(NormalizedRect::unit())
    }
}

/// Traces and simplifies the sprite outline into a polygon hitbox.
///
/// A sprite with no content, or whose outline collapses below 3 points at
/// this `epsilon`, yields the unit rect.
pub fn extract_polygon(mask: &AlphaMask, epsilon: f32) -> HitboxDefinition {
    let contour = trace_contour(mask);
    if contour.len() < 3 {
        return HitboxDefinition::unit_rect();
    }
    let simplified = simplify(&contour, epsilon);
    if simplified.len() < 3 {
        return HitboxDefinition::unit_rect();
    }
    let w = mask.width() as f32;
    let h = mask.height() as f32;
    let points = simplified
        .iter()
        .map(|p| NormalizedPoint::new((p.x / w).clamp(0.0, 1.0), (p.y / h).clamp(0.0, 1.0)))
        .collect();
    HitboxDefinition::Polygon { points }
}

/// Tight normalized bounds of every solid pixel.
///
/// A sprite with no content yields the unit rect.
pub fn extract_rect(mask: &AlphaMask) -> HitboxDefinition {
    let Some((min_x, min_y, max_x, max_y)) = mask.bounds() else {
        return HitboxDefinition::unit_rect();
    };
    let w = mask.width() as f32;
    let h = mask.height() as f32;
    HitboxDefinition::Rect(NormalizedRect::new(
        min_x as f32 / w,
        min_y as f32 / h,
        (max_x - min_x + 1) as f32 / w,
        (max_y - min_y + 1) as f32 / h,
    ))
}

/// Slices the sprite into horizontal bands with tight per-band bounds.
///
/// `bands` is clamped to `1..=`[`MAX_COMPOUND_BANDS`] and to the sprite
/// height. Leading and trailing content-free bands are trimmed; interior
/// content-free bands inherit linearly interpolated neighbor bounds so the
/// stack never leaves a vertical gap an actor could fall through. Adjacent
/// bands with identical bounds merge; a single surviving band collapses to
/// a plain rect, and a sprite with no content yields the unit rect.
pub fn extract_compound(mask: &AlphaMask, bands: usize) -> HitboxDefinition {
    let width = mask.width();
    let height = mask.height();
    if width == 0 || height == 0 {
        return HitboxDefinition::unit_rect();
    }
    let bands = bands.clamp(1, MAX_COMPOUND_BANDS).min(height);

    // Per-band pixel row range and tight horizontal bounds (exclusive right
    // edge, in pixels).
    let slices: Vec<(usize, usize, Option<(f32, f32)>)> = (0..bands)
        .map(|i| {
            let y0 = i * height / bands;
            let y1 = (i + 1) * height / bands;
            let bounds = mask
                .row_band_bounds(y0, y1)
                .map(|(x0, x1)| (x0 as f32, x1 as f32 + 1.0));
            (y0, y1, bounds)
        })
        .collect();

    let Some(first) = slices.iter().position(|s| s.2.is_some()) else {
        return HitboxDefinition::unit_rect();
    };
    let last = slices
        .iter()
        .rposition(|s| s.2.is_some())
        .unwrap_or(first);

    // Resolve each band between the first and last occupied one, filling
    // content-free bands from their occupied neighbors.
    let mut spans: Vec<(usize, usize, f32, f32)> = Vec::with_capacity(last - first + 1);
    let mut prev = first;
    for idx in first..=last {
        let (y0, y1, bounds) = slices[idx];
        let (x0, x1) = match bounds {
            Some(b) => {
                prev = idx;
                b
            }
            None => {
                let next = (idx + 1..=last)
                    .find(|&n| slices[n].2.is_some())
                    .unwrap_or(last);
                let (px0, px1) = slices[prev].2.unwrap_or((0.0, width as f32));
                let (nx0, nx1) = slices[next].2.unwrap_or((0.0, width as f32));
                let t = (idx - prev) as f32 / (next - prev) as f32;
                (px0 + (nx0 - px0) * t, px1 + (nx1 - px1) * t)
            }
        };
        spans.push((y0, y1, x0, x1));
    }

    // Merge vertically adjacent bands with identical horizontal bounds.
    let mut merged: Vec<(usize, usize, f32, f32)> = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(prev) if prev.2 == span.2 && prev.3 == span.3 => prev.1 = span.1,
            _ => merged.push(span),
        }
    }

    let w = width as f32;
    let h = height as f32;
    let mut rects: Vec<NormalizedRect> = merged
        .into_iter()
        .map(|(y0, y1, x0, x1)| {
            NormalizedRect::new(x0 / w, y0 as f32 / h, (x1 - x0) / w, (y1 - y0) as f32 / h)
        })
        .collect();

    if rects.len() == 1 {
        return HitboxDefinition::Rect(rects.remove(0));
    }
    HitboxDefinition::Compound { rects }
}
