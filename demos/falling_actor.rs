use macroquad::prelude::*;
use macroquad_tile_collision::{
    hazard_collision, penetration_depth, platform_collision, solid_collision, tile_collisions,
    Axis, CollisionShape, NormalizedRect, TileCatalog, TileCategory, TileType, TileTypeId,
};

const TILE_SIZE: f32 = 48.0;
const GRID_W: u32 = 16;
const GRID_H: u32 = 10;
const GRAVITY: f32 = 1400.0;
const RUN_SPEED: f32 = 220.0;
const JUMP_SPEED: f32 = 520.0;

// 0 = empty, 1 = block, 2 = slope up-right, 3 = slope up-left,
// 4 = one-way platform, 5 = spikes.
#[rustfmt::skip]
const LEVEL: [[u16; 16]; 10] = [
    [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    [0,0,0,0,4,4,4,0,0,0,0,0,0,0,0,0],
    [0,0,0,0,0,0,0,0,0,0,4,4,0,0,0,0],
    [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    [0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,1],
    [0,0,0,0,0,0,0,0,0,0,0,0,0,2,1,1],
    [1,3,0,0,0,0,0,0,5,5,0,0,2,1,1,1],
    [1,1,3,0,0,0,2,1,1,1,1,1,1,1,1,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

fn demo_catalog() -> TileCatalog {
    TileCatalog::new(vec![
        TileType { id: 1, category: TileCategory::Solid, shape: CollisionShape::full() },
        TileType { id: 2, category: TileCategory::Solid, shape: CollisionShape::slope_up_right() },
        TileType { id: 3, category: TileCategory::Solid, shape: CollisionShape::slope_up_left() },
        TileType {
            id: 4,
            category: TileCategory::Platform,
            shape: CollisionShape::Rect(NormalizedRect::new(0.0, 0.0, 1.0, 0.25)),
        },
        TileType { id: 5, category: TileCategory::Hazard, shape: CollisionShape::half_bottom() },
    ])
    .expect("demo catalog should validate")
}

fn level_lookup(col: u32, row: u32) -> Option<TileTypeId> {
    let id = LEVEL[row as usize][col as usize];
    (id != 0).then_some(id)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Falling Actor".into(),
        window_width: (GRID_W as f32 * TILE_SIZE) as i32,
        window_height: (GRID_H as f32 * TILE_SIZE) as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let catalog = demo_catalog();
    catalog
        .validate_ids(LEVEL.iter().flatten().copied().filter(|&id| id != 0))
        .expect("level should only place known tiles");

    let mut actor = Rect::new(2.0 * TILE_SIZE, 2.0 * TILE_SIZE, 26.0, 38.0);
    let mut velocity = vec2(0.0, 0.0);
    let mut grounded = false;
    let mut hurt_timer = 0.0f32;

    loop {
        let dt = get_frame_time().min(1.0 / 30.0);

        velocity.x = 0.0;
        if is_key_down(KeyCode::Left) {
            velocity.x = -RUN_SPEED;
        }
        if is_key_down(KeyCode::Right) {
            velocity.x = RUN_SPEED;
        }
        if is_key_pressed(KeyCode::Space) && grounded {
            velocity.y = -JUMP_SPEED;
        }
        velocity.y += GRAVITY * dt;

        // Horizontal pass: move, then push out of rect-shaped solids.
        actor.x += velocity.x * dt;
        for hit in tile_collisions(&actor, &level_lookup, &catalog, GRID_W, GRID_H, TILE_SIZE, |c| {
            c == TileCategory::Solid
        }) {
            let depth = penetration_depth(
                &actor,
                catalog.shape_of(hit.id),
                hit.origin,
                TILE_SIZE,
                Axis::Horizontal,
            );
            if depth > 0.0 {
                actor.x += if velocity.x > 0.0 { -depth } else { depth };
            }
        }

        // Vertical pass.
        let previous_y = actor.y;
        actor.y += velocity.y * dt;
        grounded = false;
        for hit in tile_collisions(&actor, &level_lookup, &catalog, GRID_W, GRID_H, TILE_SIZE, |c| {
            c == TileCategory::Solid
        }) {
            let depth = penetration_depth(
                &actor,
                catalog.shape_of(hit.id),
                hit.origin,
                TILE_SIZE,
                Axis::Vertical,
            );
            if depth > 0.0 {
                if velocity.y > 0.0 {
                    actor.y -= depth;
                    grounded = true;
                } else {
                    actor.y += depth;
                }
                velocity.y = 0.0;
            }
        }
        // Slopes report zero rect depth; step the actor up while its feet
        // still poke into a solid.
        let mut lift = 0;
        while lift < 12
            && solid_collision(&actor, &level_lookup, &catalog, GRID_W, GRID_H, TILE_SIZE)
        {
            actor.y -= 1.0;
            grounded = true;
            velocity.y = velocity.y.min(0.0);
            lift += 1;
        }

        if let Some(hit) =
            platform_collision(&actor, previous_y, &level_lookup, &catalog, GRID_W, GRID_H, TILE_SIZE)
        {
            actor.y = hit.origin.y - actor.h;
            velocity.y = 0.0;
            grounded = true;
        }

        if hazard_collision(&actor, &level_lookup, &catalog, GRID_W, GRID_H, TILE_SIZE).is_some() {
            hurt_timer = 0.3;
            actor.x = 2.0 * TILE_SIZE;
            actor.y = 2.0 * TILE_SIZE;
            velocity = vec2(0.0, 0.0);
        }
        hurt_timer = (hurt_timer - dt).max(0.0);

        clear_background(BLACK);
        for row in 0..GRID_H {
            for col in 0..GRID_W {
                let Some(id) = level_lookup(col, row) else {
                    continue;
                };
                let x = col as f32 * TILE_SIZE;
                let y = row as f32 * TILE_SIZE;
                match catalog.shape_of(id) {
                    CollisionShape::Rect(r) => {
                        let color = match catalog.category_of(id) {
                            TileCategory::Platform => SKYBLUE,
                            TileCategory::Hazard => RED,
                            _ => DARKGRAY,
                        };
                        let world = r.to_world(vec2(x, y), TILE_SIZE);
                        draw_rectangle(world.x, world.y, world.w, world.h, color);
                    }
                    CollisionShape::Polygon { points } => {
                        for i in 1..points.len() - 1 {
                            let a = points[0].to_world(vec2(x, y), TILE_SIZE);
                            let b = points[i].to_world(vec2(x, y), TILE_SIZE);
                            let c = points[i + 1].to_world(vec2(x, y), TILE_SIZE);
                            draw_triangle(a, b, c, DARKGRAY);
                        }
                    }
                    CollisionShape::None => {}
                }
            }
        }
        let actor_color = if hurt_timer > 0.0 { RED } else { GOLD };
        draw_rectangle(actor.x, actor.y, actor.w, actor.h, actor_color);
        draw_text("arrows to run, space to jump", 12.0, 24.0, 24.0, WHITE);
        next_frame().await;
    }
}
