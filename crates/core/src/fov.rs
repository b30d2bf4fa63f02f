//! Port for the external field-of-view collaborator, plus the shared
//! grid-line walk used for straight-path checks. The core never computes
//! shadowcasting itself; it asks whatever implementation the host wires in.

use crate::state::Map;
use crate::types::Pos;

/// Torch radius the campaign plays at.
pub const TORCH_RADIUS: i32 = 10;
pub const FOV_LIGHT_WALLS: bool = true;

pub trait FieldOfView {
    /// Recomputes the visible set from `origin`. Called once per consumed
    /// turn and on forced refreshes (level change).
    fn recompute(&mut self, map: &Map, origin: Pos, radius: i32, light_walls: bool);

    fn is_visible(&self, pos: Pos) -> bool;
}

/// Cells of the straight line from `from` (exclusive) to `to` (inclusive),
/// stepping one cell at a time with the axis error shared evenly.
pub fn line_between(from: Pos, to: Pos) -> Vec<Pos> {
    let total_dx = (to.x - from.x).abs();
    let total_dy = (to.y - from.y).abs();
    let sx = (to.x - from.x).signum();
    let sy = (to.y - from.y).signum();

    let mut cells = Vec::with_capacity((total_dx + total_dy) as usize);
    let mut x = from.x;
    let mut y = from.y;
    let mut step_x = 0;
    let mut step_y = 0;

    while step_x < total_dx || step_y < total_dy {
        let lhs = (1 + 2 * step_x) * total_dy;
        let rhs = (1 + 2 * step_y) * total_dx;
        if lhs == rhs {
            x += sx;
            y += sy;
            step_x += 1;
            step_y += 1;
        } else if lhs < rhs {
            x += sx;
            step_x += 1;
        } else {
            y += sy;
            step_y += 1;
        }
        cells.push(Pos { y, x });
    }
    cells
}
