//! Shared fixtures for game tests: a simple raycast FOV, scripted target
//! sources, and an open arena with a known layout.

use crate::content::{self, Species};
use crate::fov::{line_between, FieldOfView};
use crate::state::{Consumable, Entity, Gear, Item, Map};
use crate::types::{EntityId, EquipSlot, Pos, Race, Tint};

use super::{Game, TargetSource};

pub(crate) const ARENA_SIZE: usize = 24;

/// Naive raycast visibility: a tile is visible when it is within the radius
/// and no tile strictly before it on the line blocks sight.
#[derive(Default)]
pub(crate) struct RayFov {
    width: usize,
    height: usize,
    visible: Vec<bool>,
}

impl FieldOfView for RayFov {
    fn recompute(&mut self, map: &Map, origin: Pos, radius: i32, light_walls: bool) {
        self.width = map.width;
        self.height = map.height;
        self.visible = vec![false; map.width * map.height];
        for y in 0..map.height as i32 {
            for x in 0..map.width as i32 {
                let pos = Pos { y, x };
                if origin.distance(pos) > f64::from(radius) {
                    continue;
                }
                let line = line_between(origin, pos);
                let clear = line
                    .iter()
                    .take(line.len().saturating_sub(1))
                    .all(|&step| !map.blocks_sight(step));
                let lit = clear && (light_walls || !map.blocks_sight(pos));
                if lit {
                    self.visible[(y as usize) * map.width + (x as usize)] = true;
                }
            }
        }
    }

    fn is_visible(&self, pos: Pos) -> bool {
        pos.y >= 0
            && pos.x >= 0
            && (pos.y as usize) < self.height
            && (pos.x as usize) < self.width
            && self.visible[(pos.y as usize) * self.width + (pos.x as usize)]
    }
}

pub(crate) fn ray_fov() -> Box<dyn FieldOfView> {
    Box::new(RayFov::default())
}

/// Always cancels.
pub(crate) struct NoTargets;

impl TargetSource for NoTargets {
    fn pick_tile(&mut self) -> Option<Pos> {
        None
    }
}

/// Replays a fixed pick sequence, then cancels.
pub(crate) struct ScriptedTargets {
    picks: std::collections::VecDeque<Pos>,
}

impl ScriptedTargets {
    pub(crate) fn new(picks: Vec<Pos>) -> Self {
        Self { picks: picks.into() }
    }

    pub(crate) fn cancel() -> Self {
        Self::new(Vec::new())
    }
}

impl TargetSource for ScriptedTargets {
    fn pick_tile(&mut self) -> Option<Pos> {
        self.picks.pop_front()
    }
}

/// A fresh campaign flattened into an empty open arena: every generated
/// entity is removed and the player stands alone in the center of a square
/// room. Tests add exactly the entities they need.
pub(crate) fn arena_game(race: Race) -> Game {
    let mut game = Game::new(1, race, ray_fov());

    let player_id = game.state.player_id;
    game.state.draw_order.retain(|&id| id == player_id);
    game.state.entities.retain(|id, _| id == player_id);

    let mut map = Map::new(ARENA_SIZE, ARENA_SIZE);
    for y in 1..(ARENA_SIZE as i32 - 1) {
        for x in 1..(ARENA_SIZE as i32 - 1) {
            map.carve(Pos { y, x });
        }
    }
    game.state.map = map;
    game.state.player_mut().pos = Pos { y: ARENA_SIZE as i32 / 2, x: ARENA_SIZE as i32 / 2 };
    game.refresh_fov();
    game
}

/// A tier-1 gnome, the weakest stock monster.
pub(crate) fn add_monster(game: &mut Game, pos: Pos) -> EntityId {
    game.state.spawn(content::monster_entity(Species::Gnome, 1, pos))
}

fn floating_item(item: Item, name: &str) -> Entity {
    Entity {
        pos: Pos { y: 0, x: 0 },
        glyph: '*',
        name: name.to_string(),
        tint: Tint::White,
        blocks: false,
        fighter: None,
        ai: None,
        item: Some(item),
    }
}

/// Puts a consumable straight into the inventory, returning its index.
pub(crate) fn give_consumable(game: &mut Game, effect: Consumable) -> usize {
    let entity = floating_item(Item::Consumable(effect), "test draught");
    let id = game.state.entities.insert(entity);
    game.inventory.push(id);
    game.inventory.len() - 1
}

/// Puts a piece of gear straight into the inventory, returning its id.
pub(crate) fn give_gear(
    game: &mut Game,
    slot: EquipSlot,
    power: Option<i32>,
    defence: Option<i32>,
    evasion: Option<i32>,
) -> EntityId {
    let entity = floating_item(Item::Gear(Gear { slot, power, defence, evasion }), "test gear");
    let id = game.state.entities.insert(entity);
    game.inventory.push(id);
    id
}

/// Drops a loot-table item on the floor at `pos`.
pub(crate) fn place_loot(game: &mut Game, dice: i32, pos: Pos) -> EntityId {
    game.state.spawn(content::loot_entity(dice, pos))
}

pub(crate) fn place_stairs(game: &mut Game, pos: Pos) -> EntityId {
    game.state.spawn(content::stairs_entity(pos))
}
