use macroquad_tile_collision::{
    extract_compound, extract_polygon, extract_rect, AlphaMask, DEFAULT_ALPHA_THRESHOLD,
    DEFAULT_SIMPLIFY_EPSILON,
};

const SPRITE_SIZE: usize = 32;

/// A round "boulder" sprite: opaque inside a circle, transparent outside.
fn boulder_alpha() -> Vec<u8> {
    let mut alpha = vec![0u8; SPRITE_SIZE * SPRITE_SIZE];
    let center = SPRITE_SIZE as f32 / 2.0;
    let radius = SPRITE_SIZE as f32 * 0.4;
    for y in 0..SPRITE_SIZE {
        for x in 0..SPRITE_SIZE {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if (dx * dx + dy * dy).sqrt() <= radius {
                alpha[y * SPRITE_SIZE + x] = 255;
            }
        }
    }
    alpha
}

fn main() -> anyhow::Result<()> {
    let alpha = boulder_alpha();
    let mask = AlphaMask::from_alpha(&alpha, SPRITE_SIZE, SPRITE_SIZE, DEFAULT_ALPHA_THRESHOLD);

    let polygon = extract_polygon(&mask, DEFAULT_SIMPLIFY_EPSILON);
    let rect = extract_rect(&mask);
    let compound = extract_compound(&mask, 6);

    println!("polygon mode:\n{}\n", serde_json::to_string_pretty(&polygon)?);
    println!("rect mode:\n{}\n", serde_json::to_string_pretty(&rect)?);
    println!("compound mode (6 bands):\n{}", serde_json::to_string_pretty(&compound)?);
    Ok(())
}
