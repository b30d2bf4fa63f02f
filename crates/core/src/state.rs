//! Tile grid, entities, and the shared level state they live in.

use slotmap::SlotMap;

use crate::fov::line_between;
use crate::types::{DeathKind, EntityId, EquipSlot, Pos, StatusEffect, Tint};

pub const REMAINS_GLYPH: char = '%';
pub const STAIRS_GLYPH: char = '<';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub blocked: bool,
    pub blocks_sight: bool,
    pub explored: bool,
}

impl Tile {
    pub fn wall() -> Self {
        Self { blocked: true, blocks_sight: true, explored: false }
    }
}

#[derive(Clone)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl Map {
    /// A fresh map starts fully blocked; generation carves it open.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![Tile::wall(); width * height] }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> Option<&Tile> {
        self.in_bounds(pos).then(|| &self.tiles[self.index(pos)])
    }

    /// Out-of-bounds coordinates count as blocked.
    pub fn is_blocked_tile(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_none_or(|tile| tile.blocked)
    }

    pub fn blocks_sight(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_none_or(|tile| tile.blocks_sight)
    }

    pub fn carve(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.tiles[idx].blocked = false;
            self.tiles[idx].blocks_sight = false;
        }
    }

    pub fn mark_explored(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.tiles[idx].explored = true;
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Combat capability: the stat block plus the death behavior dispatched when
/// hit points reach zero. `power`/`defence`/`evasion` are the derived values;
/// the `base_*` fields are what `recompute_stats` rebuilds them from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter {
    pub hp: i32,
    pub max_hp: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub piety: i32,
    pub max_piety: i32,
    pub power: i32,
    pub base_power: i32,
    pub defence: i32,
    pub base_defence: i32,
    pub evasion: i32,
    pub base_evasion: i32,
    pub status: Option<StatusEffect>,
    pub status_timer: i32,
    pub death: DeathKind,
}

impl Fighter {
    pub fn new(hp: i32, mana: i32, piety: i32, defence: i32, power: i32, evasion: i32, death: DeathKind) -> Self {
        Self {
            hp,
            max_hp: hp,
            mana,
            max_mana: mana,
            piety,
            max_piety: piety,
            power,
            base_power: power,
            defence,
            base_defence: defence,
            evasion,
            base_evasion: evasion,
            status: None,
            status_timer: 0,
            death,
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn restore_mana(&mut self, amount: i32) {
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    pub fn restore_piety(&mut self, amount: i32) {
        self.piety = (self.piety + amount).min(self.max_piety);
    }

    pub fn spend_mana(&mut self, amount: i32) {
        self.mana = (self.mana - amount).max(0);
    }

    pub fn spend_piety(&mut self, amount: i32) {
        self.piety = (self.piety - amount).max(0);
    }
}

/// Behavior attached to a monster. Confusion wraps the prior variant by
/// value so it can be restored, memory included, when the effect wears off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ai {
    Pursuit { memory: Option<Pos> },
    Confused { previous: Box<Ai>, turns_left: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gear {
    pub slot: EquipSlot,
    pub power: Option<i32>,
    pub defence: Option<i32>,
    pub evasion: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consumable {
    Heal,
    RestoreMana,
    LightningBolt,
    Fireball,
    Confusion,
    AcidArrow,
    MagicMissile,
    Blink,
    /// The scintillating phial: raises maximum hit points and heals to full.
    Invigorate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    Consumable(Consumable),
    Gear(Gear),
}

/// A game object: player, monster, loose item, stairs marker, or remains.
/// Capabilities are composed, not subclassed; any subset may be present.
#[derive(Clone, Debug)]
pub struct Entity {
    pub pos: Pos,
    pub glyph: char,
    pub name: String,
    pub tint: Tint,
    pub blocks: bool,
    pub fighter: Option<Fighter>,
    pub ai: Option<Ai>,
    pub item: Option<Item>,
}

impl Entity {
    pub fn is_stairs(&self) -> bool {
        self.glyph == STAIRS_GLYPH
    }
}

/// The level currently being played: grid plus every entity on it.
/// `draw_order` is the authoritative layering and turn order; entities held
/// in the player's inventory stay in `entities` but leave `draw_order`.
pub struct GameState {
    pub map: Map,
    pub entities: SlotMap<EntityId, Entity>,
    pub draw_order: Vec<EntityId>,
    pub player_id: EntityId,
}

impl GameState {
    pub fn player(&self) -> &Entity {
        &self.entities[self.player_id]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.entities[self.player_id]
    }

    /// Appends at the front of the draw order, above everything already placed.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert(entity);
        self.draw_order.push(id);
        id
    }

    pub fn send_to_back(&mut self, id: EntityId) {
        self.draw_order.retain(|&other| other != id);
        self.draw_order.insert(0, id);
    }

    pub fn send_to_front(&mut self, id: EntityId) {
        self.draw_order.retain(|&other| other != id);
        self.draw_order.push(id);
    }

    /// True when the tile itself blocks or a blocking entity occupies it.
    pub fn is_blocked(&self, pos: Pos) -> bool {
        if self.map.is_blocked_tile(pos) {
            return true;
        }
        self.draw_order
            .iter()
            .filter_map(|&id| self.entities.get(id))
            .any(|entity| entity.blocks && entity.pos == pos)
    }

    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.draw_order.clone()
    }

    /// Moves by the given delta if the destination is open; otherwise no-op.
    pub fn move_entity(&mut self, id: EntityId, dx: i32, dy: i32) {
        let Some(entity) = self.entities.get(id) else { return };
        let dest = entity.pos.offset(dx, dy);
        if !self.is_blocked(dest) {
            self.entities[id].pos = dest;
        }
    }

    /// Greedy single step toward `target`: try the diagonal that closes the
    /// gap, then fall back to the horizontal or vertical leg alone.
    pub fn step_toward(&mut self, id: EntityId, target: Pos) {
        let Some(entity) = self.entities.get(id) else { return };
        let pos = entity.pos;
        let ddx = (target.x - pos.x).signum();
        let ddy = (target.y - pos.y).signum();
        if !self.is_blocked(pos.offset(ddx, ddy)) {
            self.move_entity(id, ddx, ddy);
        } else if ddx != 0 && !self.is_blocked(pos.offset(ddx, 0)) {
            self.move_entity(id, ddx, 0);
        } else if ddy != 0 && !self.is_blocked(pos.offset(0, ddy)) {
            self.move_entity(id, 0, ddy);
        }
    }

    /// Straight-line walkability test used by wandering monsters to pick a
    /// destination they could actually reach by walking in a line.
    pub fn can_walk_between(&self, from: Pos, to: Pos) -> bool {
        line_between(from, to).into_iter().all(|pos| !self.is_blocked(pos))
    }
}
