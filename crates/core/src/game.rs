//! Campaign session: command handling, turn sequencing, and the read
//! surface the host renders from.

mod abilities;
mod ai;
mod bootstrap;
mod combat;
mod inventory;
mod progression;
mod stats;
#[cfg(test)]
pub(crate) mod test_support;

use crate::fov::{FOV_LIGHT_WALLS, FieldOfView, TORCH_RADIUS};
use crate::log::MessageLog;
use crate::rng::GameRng;
use crate::state::GameState;
use crate::types::{ArtifactKind, Command, EntityId, EquipSlot, GameStatus, Pos, Race, TurnResult};

/// Port for the blocking targeting interaction. The host owns the input
/// loop; the core only sees the chosen tile, or `None` for a cancel.
pub trait TargetSource {
    fn pick_tile(&mut self) -> Option<Pos>;
}

/// Player panel snapshot: resources with maxima plus derived combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hp: i32,
    pub max_hp: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub piety: i32,
    pub max_piety: i32,
    pub power: i32,
    pub defence: i32,
    pub evasion: i32,
}

/// One campaign. Owns the current level, the player's belongings, the
/// uniqueness pool for leader drops, and the injected RNG and FOV
/// collaborators. Everything mutates through the command surface below.
pub struct Game {
    rng: GameRng,
    state: GameState,
    depth: u8,
    race: Race,
    status: GameStatus,
    inventory: Vec<EntityId>,
    weapon: Option<EntityId>,
    armour: Option<EntityId>,
    jewellery: Option<EntityId>,
    artifacts_granted: Vec<ArtifactKind>,
    log: MessageLog,
    fov: Box<dyn FieldOfView>,
}

impl Game {
    /// Resolves one player command. On a consumed turn the player's status
    /// timer ticks and every monster takes its turn before control returns.
    pub fn handle_command(&mut self, command: Command, targets: &mut dyn TargetSource) -> TurnResult {
        if self.status != GameStatus::Playing {
            return TurnResult::NotConsumed;
        }
        let result = match command {
            Command::Move { dx, dy } => self.move_or_attack(dx, dy),
            Command::Wait => TurnResult::Consumed,
            Command::PickUp => self.pick_up(),
            Command::UseItem { index } => self.use_item(index, targets),
            Command::DropItem { index } => self.drop_item(index),
            Command::Unequip { slot } => self.unequip(slot),
            Command::Pray => self.pray(),
            Command::Ascend => self.ascend_stairs(),
            Command::Help | Command::Quit => TurnResult::NotConsumed,
        };
        if result == TurnResult::Consumed {
            self.refresh_fov();
            self.tick_player_status();
            self.run_monster_turns();
        }
        result
    }

    fn move_or_attack(&mut self, dx: i32, dy: i32) -> TurnResult {
        let dest = self.state.player().pos.offset(dx, dy);
        let target = self.state.draw_order.iter().copied().find(|&id| {
            id != self.state.player_id
                && self.state.entities[id].fighter.is_some()
                && self.state.entities[id].pos == dest
        });
        match target {
            Some(target_id) => self.attack(self.state.player_id, target_id),
            None => {
                let player_id = self.state.player_id;
                self.state.move_entity(player_id, dx, dy);
            }
        }
        TurnResult::Consumed
    }

    /// Recomputes visibility from the player and folds it into the explored
    /// overlay. Called after every consumed turn and on level changes.
    fn refresh_fov(&mut self) {
        let origin = self.state.player().pos;
        self.fov.recompute(&self.state.map, origin, TORCH_RADIUS, FOV_LIGHT_WALLS);
        for y in 0..self.state.map.height as i32 {
            for x in 0..self.state.map.width as i32 {
                let pos = Pos { y, x };
                if self.fov.is_visible(pos) {
                    self.state.map.mark_explored(pos);
                }
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.fov.is_visible(pos)
    }

    /// Inventory in display order; indices here are what `UseItem`,
    /// `DropItem`, and menu selection refer to.
    pub fn inventory(&self) -> &[EntityId] {
        &self.inventory
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<EntityId> {
        match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Armour => self.armour,
            EquipSlot::Jewellery => self.jewellery,
        }
    }

    pub fn artifacts_granted(&self) -> &[ArtifactKind] {
        &self.artifacts_granted
    }

    pub fn player_stats(&self) -> StatsSnapshot {
        let fighter = self.state.player().fighter.as_ref().expect("player keeps a fighter");
        StatsSnapshot {
            hp: fighter.hp,
            max_hp: fighter.max_hp,
            mana: fighter.mana,
            max_mana: fighter.max_mana,
            piety: fighter.piety,
            max_piety: fighter.max_piety,
            power: fighter.power,
            defence: fighter.defence,
            evasion: fighter.evasion,
        }
    }
}
