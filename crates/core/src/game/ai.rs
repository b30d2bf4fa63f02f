//! Monster turns: pursuit with memory, wandering, and confusion.

use crate::content::{AI_INTEREST, WANDER_RADIUS};
use crate::state::Ai;
use crate::types::{EntityId, GameStatus, Pos, StatusEffect, Tint};

use super::Game;

impl Game {
    /// Runs every monster once, in draw order. The snapshot of ids taken up
    /// front keeps the walk stable while turns mutate the roster.
    pub(super) fn run_monster_turns(&mut self) {
        for id in self.state.entity_ids() {
            if self.status != GameStatus::Playing {
                break;
            }
            if id == self.state.player_id {
                continue;
            }
            self.take_monster_turn(id);
        }
    }

    fn take_monster_turn(&mut self, id: EntityId) {
        let Some(ai) = self.state.entities.get_mut(id).and_then(|entity| entity.ai.take()) else {
            return;
        };
        let next = match ai {
            Ai::Pursuit { memory } => self.pursuit_turn(id, memory),
            Ai::Confused { previous, turns_left } => self.confused_turn(id, *previous, turns_left),
        };
        if let Some(entity) = self.state.entities.get_mut(id) {
            entity.ai = Some(next);
        }
    }

    /// A monster the player can see also sees the player, unless the player
    /// is hidden. Seen players are chased and attacked; otherwise the
    /// monster walks toward its remembered position, losing interest with a
    /// small chance each turn, and picks a wander target when idle.
    fn pursuit_turn(&mut self, id: EntityId, mut memory: Option<Pos>) -> Ai {
        let monster_pos = self.state.entities[id].pos;
        let player = self.state.player();
        let player_pos = player.pos;
        let player_hidden = player
            .fighter
            .as_ref()
            .is_some_and(|fighter| fighter.status == Some(StatusEffect::Hidden));

        if self.fov.is_visible(monster_pos) && !player_hidden {
            memory = Some(player_pos);
            if monster_pos.distance(player_pos) >= 2.0 {
                self.state.step_toward(id, player_pos);
            } else {
                self.attack(id, self.state.player_id);
            }
        } else if let Some(target) = memory {
            self.state.step_toward(id, target);
            let arrived = self.state.entities[id].pos == target;
            if arrived || self.rng.roll(0, 100) > AI_INTEREST {
                memory = None;
            }
        } else {
            memory = Some(self.wander_target(monster_pos));
        }
        Ai::Pursuit { memory }
    }

    /// Samples destinations in a square around the monster until one is
    /// walkable in a straight line. The origin itself is a valid sample, so
    /// the loop always terminates.
    fn wander_target(&mut self, origin: Pos) -> Pos {
        loop {
            let target = Pos {
                y: self.rng.roll(origin.y - WANDER_RADIUS, origin.y + WANDER_RADIUS),
                x: self.rng.roll(origin.x - WANDER_RADIUS, origin.x + WANDER_RADIUS),
            };
            if self.state.can_walk_between(origin, target) {
                return target;
            }
        }
    }

    /// One random stumble per turn. The wrapped behavior comes back, memory
    /// intact, at the end of the final confused step.
    fn confused_turn(&mut self, id: EntityId, previous: Ai, turns_left: i32) -> Ai {
        let dx = self.rng.roll(-1, 1);
        let dy = self.rng.roll(-1, 1);
        self.state.move_entity(id, dx, dy);
        let remaining = turns_left - 1;
        if remaining <= 0 {
            let name = self.state.entities[id].name.clone();
            self.log.push(format!("The {name} is no longer confused!"), Tint::Red);
            previous
        } else {
            Ai::Confused { previous: Box::new(previous), turns_left: remaining }
        }
    }
}
