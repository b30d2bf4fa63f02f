//! Room placement and corridor carving for base level topology.

use crate::rng::GameRng;
use crate::state::Map;
use crate::types::Pos;

use super::{ROOM_MAX_SIZE, ROOM_MIN_SIZE};

/// Axis-aligned room rectangle. Only used while generating; the finished
/// level keeps carved tiles, not rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoomRect {
    pub(crate) x1: i32,
    pub(crate) y1: i32,
    pub(crate) x2: i32,
    pub(crate) y2: i32,
}

impl RoomRect {
    pub(crate) fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub(crate) fn center(self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    /// Inclusive overlap test; touching borders count as intersecting.
    pub(crate) fn intersects(self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Samples rectangles up to the room budget, keeping only those that do not
/// overlap an accepted room. Rejected candidates are discarded silently, so
/// the result may hold fewer rooms than the budget.
pub(super) fn build_rooms(rng: &mut GameRng, width: usize, height: usize, max_rooms: usize) -> Vec<RoomRect> {
    let mut rooms: Vec<RoomRect> = Vec::new();
    for _ in 0..max_rooms {
        let room_width = rng.roll(ROOM_MIN_SIZE, ROOM_MAX_SIZE);
        let room_height = rng.roll(ROOM_MIN_SIZE, ROOM_MAX_SIZE);
        let x = rng.roll(0, width as i32 - room_width - 1);
        let y = rng.roll(0, height as i32 - room_height - 1);
        let candidate = RoomRect::new(x, y, room_width, room_height);
        if rooms.iter().any(|room| candidate.intersects(room)) {
            continue;
        }
        rooms.push(candidate);
    }
    rooms
}

/// Opens the room interior, leaving its one-tile border as wall.
pub(super) fn carve_room(map: &mut Map, room: RoomRect) {
    for x in (room.x1 + 1)..room.x2 {
        for y in (room.y1 + 1)..room.y2 {
            map.carve(Pos { y, x });
        }
    }
}

/// Connects consecutive room centers with L-shaped corridors. The leg order
/// is a coin flip per corridor; either order yields the same connectivity.
pub(super) fn carve_corridors(map: &mut Map, rng: &mut GameRng, rooms: &[RoomRect]) {
    for pair in rooms.windows(2) {
        let prev = pair[0].center();
        let next = pair[1].center();
        if rng.coin() {
            carve_h_tunnel(map, prev.x, next.x, prev.y);
            carve_v_tunnel(map, prev.y, next.y, next.x);
        } else {
            carve_v_tunnel(map, prev.y, next.y, prev.x);
            carve_h_tunnel(map, prev.x, next.x, next.y);
        }
    }
}

fn carve_h_tunnel(map: &mut Map, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        map.carve(Pos { y, x });
    }
}

fn carve_v_tunnel(map: &mut Map, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        map.carve(Pos { y, x });
    }
}
