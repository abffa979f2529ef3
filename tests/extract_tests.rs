// tests/extract_tests.rs

use macroquad_tile_collision::{
    extract_compound, extract_polygon, extract_rect, simplify, AlphaMask, HitboxDefinition,
    NormalizedRect, DEFAULT_ALPHA_THRESHOLD, DEFAULT_SIMPLIFY_EPSILON,
};

fn mask_from_rows(rows: &[&[u8]]) -> AlphaMask {
    let height = rows.len();
    let width = rows[0].len();
    let mut alpha = Vec::with_capacity(width * height);
    for row in rows {
        for &px in *row {
            alpha.push(if px > 0 { 255 } else { 0 });
        }
    }
    AlphaMask::from_alpha(&alpha, width, height, DEFAULT_ALPHA_THRESHOLD)
}

fn opaque(width: usize, height: usize) -> AlphaMask {
    AlphaMask::from_alpha(&vec![255u8; width * height], width, height, DEFAULT_ALPHA_THRESHOLD)
}

#[test]
fn bounding_rect_of_a_centered_block() {
    // 4x4 sprite, alpha only at (1,1), (1,2), (2,1), (2,2).
    let mut alpha = [0u8; 16];
    for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        alpha[y * 4 + x] = 255;
    }
    let mask = AlphaMask::from_alpha(&alpha, 4, 4, 128);
    let hitbox = extract_rect(&mask);
    assert_eq!(
        hitbox,
        HitboxDefinition::Rect(NormalizedRect::new(0.25, 0.25, 0.5, 0.5))
    );
}

#[test]
fn empty_sprites_fall_back_to_the_unit_rect() {
    let empty = mask_from_rows(&[&[0, 0], &[0, 0]]);
    let unit = HitboxDefinition::Rect(NormalizedRect::unit());
    assert_eq!(extract_rect(&empty), unit);
    assert_eq!(extract_polygon(&empty, DEFAULT_SIMPLIFY_EPSILON), unit);
    assert_eq!(extract_compound(&empty, 4), unit);

    let zero = AlphaMask::from_alpha(&[], 0, 0, 128);
    assert_eq!(extract_rect(&zero), unit);
    assert_eq!(extract_polygon(&zero, DEFAULT_SIMPLIFY_EPSILON), unit);
    assert_eq!(extract_compound(&zero, 4), unit);
}

#[test]
fn polygon_extraction_follows_the_outline() {
    // A 12x12 sprite with an 8x8 opaque block at (2, 2).
    let mut alpha = [0u8; 144];
    for y in 2..10 {
        for x in 2..10 {
            alpha[y * 12 + x] = 255;
        }
    }
    let mask = AlphaMask::from_alpha(&alpha, 12, 12, 128);
    let hitbox = extract_polygon(&mask, 0.5);
    let HitboxDefinition::Polygon { points } = hitbox else {
        panic!("expected a polygon");
    };
    assert!(points.len() >= 4);
    for p in &points {
        // All vertices on the block's boundary, normalized.
        let near = |v: f32, t: f32| (v - t).abs() < 1e-5;
        assert!(
            near(p.x, 2.0 / 12.0) || near(p.x, 10.0 / 12.0)
                || near(p.y, 2.0 / 12.0) || near(p.y, 10.0 / 12.0),
            "vertex {:?} off the outline",
            p
        );
        assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    }
}

#[test]
fn oversimplified_outline_falls_back_to_the_unit_rect() {
    // A single pixel traces 4 lattice points; a huge epsilon collapses the
    // chord to its 2 endpoints, which is below the 3-point minimum.
    let mask = mask_from_rows(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
    let hitbox = extract_polygon(&mask, 100.0);
    assert_eq!(hitbox, HitboxDefinition::Rect(NormalizedRect::unit()));
}

#[test]
fn rdp_is_idempotent_at_a_fixed_epsilon() {
    use macroquad::math::vec2;
    let contour = vec![
        vec2(0.0, 0.0),
        vec2(4.0, 0.5),
        vec2(8.0, 0.0),
        vec2(9.0, 4.0),
        vec2(8.0, 8.0),
        vec2(4.0, 7.5),
        vec2(0.0, 8.0),
        vec2(0.5, 4.0),
    ];
    let once = simplify(&contour, 2.0);
    let twice = simplify(&once, 2.0);
    assert_eq!(once, twice);
}

#[test]
fn compound_mode_collapses_a_fully_opaque_sprite() {
    let mask = opaque(16, 12);
    let hitbox = extract_compound(&mask, 6);
    assert_eq!(
        hitbox,
        HitboxDefinition::Rect(NormalizedRect::unit()),
        "uniform bands must merge into one full-image rect"
    );
}

#[test]
fn compound_mode_keeps_distinct_band_bounds() {
    // Wide base with a narrow column on top, like a tree sprite.
    let mask = mask_from_rows(&[
        &[0, 0, 1, 1, 0, 0],
        &[0, 0, 1, 1, 0, 0],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
    ]);
    let hitbox = extract_compound(&mask, 2);
    let HitboxDefinition::Compound { rects } = hitbox else {
        panic!("expected a compound");
    };
    assert_eq!(rects.len(), 2);
    // Narrow top band.
    assert_eq!(rects[0], NormalizedRect::new(2.0 / 6.0, 0.0, 2.0 / 6.0, 0.5));
    // Full-width base.
    assert_eq!(rects[1], NormalizedRect::new(0.0, 0.5, 1.0, 0.5));
}

#[test]
fn compound_mode_interpolates_interior_gaps() {
    // Content at the top and bottom with an empty middle third: the gap
    // band must be filled, never skipped.
    let mask = mask_from_rows(&[
        &[1, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 1],
    ]);
    let hitbox = extract_compound(&mask, 3);
    let HitboxDefinition::Compound { rects } = hitbox else {
        panic!("expected a compound");
    };
    assert_eq!(rects.len(), 3);
    // The middle band averages its neighbors' bounds: x from 1, width
    // interpolates between [0,4) and [2,6).
    assert_eq!(rects[1], NormalizedRect::new(1.0 / 6.0, 1.0 / 3.0, 4.0 / 6.0, 1.0 / 3.0));
    // No vertical gap between consecutive bands.
    for pair in rects.windows(2) {
        assert!((pair[0].y + pair[0].h - pair[1].y).abs() < 1e-6);
    }
}

#[test]
fn compound_mode_trims_leading_and_trailing_empty_bands() {
    let mask = mask_from_rows(&[
        &[0, 0, 0, 0],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
        &[0, 0, 0, 0],
    ]);
    let hitbox = extract_compound(&mask, 4);
    // Both content bands share bounds, merge, and collapse to a rect that
    // starts below the trimmed empty band.
    assert_eq!(
        hitbox,
        HitboxDefinition::Rect(NormalizedRect::new(0.25, 0.25, 0.5, 0.5))
    );
}

#[test]
fn single_band_result_is_a_plain_rect() {
    let mask = mask_from_rows(&[&[0, 1, 1, 0]]);
    let hitbox = extract_compound(&mask, 8);
    assert_eq!(
        hitbox,
        HitboxDefinition::Rect(NormalizedRect::new(0.25, 0.0, 0.5, 1.0))
    );
}

#[test]
fn definitions_serialize_with_a_type_tag() -> anyhow::Result<()> {
    let rect = extract_rect(&opaque(4, 4));
    let json = serde_json::to_string(&rect)?;
    assert!(json.contains(r#""type":"rect""#), "got {}", json);

    let compound = HitboxDefinition::Compound {
        rects: vec![NormalizedRect::unit(), NormalizedRect::new(0.0, 0.0, 1.0, 0.5)],
    };
    let json = serde_json::to_string(&compound)?;
    assert!(json.contains(r#""type":"compound""#), "got {}", json);
    let parsed: HitboxDefinition = serde_json::from_str(&json)?;
    assert_eq!(compound, parsed);
    Ok(())
}
