//! Marching-squares boundary walk over an alpha mask.

use std::collections::HashSet;

use macroquad::math::{vec2, Vec2};

use super::mask::AlphaMask;

/// Travel direction between lattice points on the solid/empty boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Traces the outer contour of the mask's first solid region.
///
/// Starts at the first solid pixel in row-major order and walks the
/// boundary using the 16-case 2x2-neighborhood table; the two saddle
/// configurations are resolved from the direction of travel on entry so
/// the walk never crosses between diagonally adjacent regions. Points are
/// lattice coordinates in pixel units.
///
/// The walk stops once a (position, direction) edge repeats. As a guard
/// against a stuck walk it is also capped at `width * height * 4` steps;
/// hitting the cap logs a warning and yields the partial contour.
pub(crate) fn trace_contour(mask: &AlphaMask) -> Vec<Vec2> {
    let Some((start_x, start_y)) = mask.first_solid() else {
        return Vec::new();
    };

    let mut contour = Vec::new();
    let mut visited: HashSet<(i32, i32, Direction)> = HashSet::new();
    let mut x = start_x;
    let mut y = start_y;
    // The first solid pixel in row-major order always produces configuration
    // 8, so the initial value is never consulted by a saddle.
    let mut dir = Direction::Down;
    let cap = mask.width() * mask.height() * 4;

    loop {
        let config = mask.is_solid(x - 1, y - 1) as u8
            | (mask.is_solid(x, y - 1) as u8) << 1
            | (mask.is_solid(x - 1, y) as u8) << 2
            | (mask.is_solid(x, y) as u8) << 3;

        let next = match config {
            1 | 5 | 13 => Direction::Up,
            2 | 3 | 7 => Direction::Right,
            4 | 12 | 14 => Direction::Left,
            8 | 10 | 11 => Direction::Down,
            6 => {
                if dir == Direction::Up {
                    Direction::Left
                } else {
                    Direction::Right
                }
            }
            9 => {
                if dir == Direction::Right {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
            // 0 or 15: the walk left the boundary, nothing more to trace.
            _ => break,
        };

        if !visited.insert((x, y, next)) {
            // Loop closed.
            break;
        }
        if contour.len() >= cap {
            log::warn!(
                "contour trace hit the {} step cap on a {}x{} sprite, truncating",
                cap,
                mask.width(),
                mask.height()
            );
            break;
        }
        contour.push(vec2(x as f32, y as f32));

        match next {
            Direction::Up => y -= 1,
            Direction::Down => y += 1,
            Direction::Left => x -= 1,
            Direction::Right => x += 1,
        }
        dir = next;
    }

    contour
}
