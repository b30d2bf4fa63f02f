//! Procedural level generation: rooms, corridors, and initial content.

mod layout;
mod spawns;

use crate::content::FINAL_DEPTH;
use crate::rng::GameRng;
use crate::state::{Entity, Map};
use crate::types::Pos;

use layout::{build_rooms, carve_corridors, carve_room};
use spawns::{place_leader, populate_rooms};

pub const MAP_WIDTH: usize = 140;
pub const MAP_HEIGHT: usize = 90;
pub const MAX_ROOMS: usize = 50;
pub const ROOM_MIN_SIZE: i32 = 3;
pub const ROOM_MAX_SIZE: i32 = 15;
pub const MAX_ROOM_MONSTERS: i32 = 3;
pub const MAX_ROOM_ITEMS: i32 = 2;

/// A freshly generated level. `entities` is already in draw order: loose
/// items at the back, then monsters, the stairs marker, and the leader.
pub struct GeneratedLevel {
    pub map: Map,
    pub entities: Vec<Entity>,
    pub player_start: Pos,
}

pub struct MapGenerator {
    pub width: usize,
    pub height: usize,
    pub max_rooms: usize,
    pub depth: u8,
}

impl MapGenerator {
    pub fn new(depth: u8) -> Self {
        Self { width: MAP_WIDTH, height: MAP_HEIGHT, max_rooms: MAX_ROOMS, depth }
    }

    pub fn generate(&self, rng: &mut GameRng) -> GeneratedLevel {
        let mut map = Map::new(self.width, self.height);
        let rooms = build_rooms(rng, self.width, self.height, self.max_rooms);
        for &room in &rooms {
            carve_room(&mut map, room);
        }
        carve_corridors(&mut map, rng, &rooms);

        let player_start =
            rooms.first().map(|room| room.center()).unwrap_or(Pos { y: 1, x: 1 });

        let mut entities = populate_rooms(rng, self.depth, &map, &rooms, player_start);

        if self.depth < FINAL_DEPTH && !rooms.is_empty() {
            let stair_room = rooms[rng.roll(0, rooms.len() as i32 - 1) as usize];
            entities.push(crate::content::stairs_entity(stair_room.center()));
        }

        entities.push(place_leader(rng, self.depth, &map, &entities, player_start));

        GeneratedLevel { map, entities, player_start }
    }
}

pub fn generate_level(rng: &mut GameRng, depth: u8) -> GeneratedLevel {
    MapGenerator::new(depth).generate(rng)
}

impl GeneratedLevel {
    /// Stable byte encoding of everything generation decided, used by the
    /// determinism tests to compare runs.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.map.width as u32).to_le_bytes());
        bytes.extend((self.map.height as u32).to_le_bytes());
        for tile in &self.map.tiles {
            bytes.push(u8::from(tile.blocked) | (u8::from(tile.blocks_sight) << 1));
        }
        bytes.extend(self.player_start.y.to_le_bytes());
        bytes.extend(self.player_start.x.to_le_bytes());
        bytes.extend((self.entities.len() as u32).to_le_bytes());
        for entity in &self.entities {
            bytes.push(entity.glyph as u8);
            bytes.extend(entity.pos.y.to_le_bytes());
            bytes.extend(entity.pos.x.to_le_bytes());
            bytes.push(u8::from(entity.blocks));
            bytes.push(u8::from(entity.fighter.is_some()));
            bytes.push(u8::from(entity.ai.is_some()));
            bytes.push(u8::from(entity.item.is_some()));
            bytes.extend((entity.name.len() as u32).to_le_bytes());
            bytes.extend(entity.name.as_bytes());
        }
        bytes
    }
}
