//! Melee resolution, damage application, and death dispatch.

use crate::content::{self, EVASION_CEILING};
use crate::log::capitalise;
use crate::rng::GameRng;
use crate::state::REMAINS_GLYPH;
use crate::types::{ArtifactKind, DeathKind, EntityId, GameStatus, Pos, Tint};

use super::Game;

/// Contested damage roll. Negative results simply fail the damage check in
/// `attack`, so truncation toward zero never changes the outcome.
pub(super) fn attack_damage(rng: &mut GameRng, power: i32, defence: i32) -> i32 {
    (rng.roll(0, power + 5) - rng.roll(0, defence)) / 2
}

impl Game {
    /// One melee swing. The dodge roll happens first; only a failed dodge
    /// rolls damage, so the RNG stream depends on the dodge outcome.
    pub(super) fn attack(&mut self, attacker_id: EntityId, target_id: EntityId) {
        let Some(power) = self
            .state
            .entities
            .get(attacker_id)
            .and_then(|entity| entity.fighter.as_ref())
            .map(|fighter| fighter.power)
        else {
            return;
        };
        let attacker_name = self.state.entities[attacker_id].name.clone();
        let Some((defence, evasion)) = self
            .state
            .entities
            .get(target_id)
            .and_then(|entity| entity.fighter.as_ref())
            .map(|fighter| (fighter.defence, fighter.evasion))
        else {
            return;
        };
        let target_name = self.state.entities[target_id].name.clone();

        if self.rng.roll(0, EVASION_CEILING) > evasion {
            let damage = attack_damage(&mut self.rng, power, defence);
            if damage > 0 {
                self.log.push(
                    format!(
                        "{} attacks {target_name} for {damage} hit points.",
                        capitalise(&attacker_name)
                    ),
                    Tint::White,
                );
                self.take_damage(target_id, damage);
            } else {
                self.log.push(
                    format!("{} attacks {target_name} but it has no effect!", capitalise(&attacker_name)),
                    Tint::White,
                );
            }
        } else {
            self.log.push(
                format!("{} attacks but {target_name} dodges the blow!", capitalise(&attacker_name)),
                Tint::White,
            );
        }
    }

    /// Applies damage, clamping hit points at zero. Reaching zero triggers
    /// the target's death behavior exactly once.
    pub(super) fn take_damage(&mut self, id: EntityId, damage: i32) {
        if damage <= 0 {
            return;
        }
        let Some(fighter) =
            self.state.entities.get_mut(id).and_then(|entity| entity.fighter.as_mut())
        else {
            return;
        };
        if fighter.hp == 0 {
            return;
        }
        fighter.hp = (fighter.hp - damage).max(0);
        if fighter.hp == 0 {
            self.die(id);
        }
    }

    fn die(&mut self, id: EntityId) {
        let Some(death) = self
            .state
            .entities
            .get(id)
            .and_then(|entity| entity.fighter.as_ref())
            .map(|fighter| fighter.death)
        else {
            return;
        };
        match death {
            DeathKind::Player => {
                self.log.push("You died!", Tint::Red);
                let player = self.state.player_mut();
                player.glyph = REMAINS_GLYPH;
                player.tint = Tint::Red;
                self.status = GameStatus::Dead;
            }
            DeathKind::Monster => {
                let name = self.state.entities[id].name.clone();
                self.log.push(format!("{} is dead!", capitalise(&name)), Tint::Orange);
                self.into_remains(id);
                self.reward_piety(1);
            }
            DeathKind::Leader => {
                let entity = &self.state.entities[id];
                let name = entity.name.clone();
                let pos = entity.pos;
                self.log.push(format!("{} is dead!", capitalise(&name)), Tint::Pink);
                self.into_remains(id);
                self.reward_piety(3);
                self.spawn_artifact(pos);
            }
            DeathKind::Victory => {
                let name = self.state.entities[id].name.clone();
                self.log.push(format!("{} is dead!", capitalise(&name)), Tint::Pink);
                self.into_remains(id);
                self.reward_piety(3);
                self.status = GameStatus::Won;
                self.log.push("The last invader leader has fallen. The caverns are yours again!", Tint::Yellow);
            }
        }
    }

    /// Strips every capability and drops the corpse under everything else.
    fn into_remains(&mut self, id: EntityId) {
        if let Some(entity) = self.state.entities.get_mut(id) {
            entity.name = format!("remains of {}", entity.name);
            entity.glyph = REMAINS_GLYPH;
            entity.tint = Tint::Red;
            entity.blocks = false;
            entity.fighter = None;
            entity.ai = None;
        }
        self.state.send_to_back(id);
    }

    fn reward_piety(&mut self, amount: i32) {
        if let Some(fighter) = self.state.player_mut().fighter.as_mut() {
            fighter.restore_piety(amount);
        }
    }

    /// Each leader kill grants one artifact the campaign has not granted
    /// yet. The pool holds four; later kills after exhaustion grant nothing.
    fn spawn_artifact(&mut self, pos: Pos) {
        if self.artifacts_granted.len() == ArtifactKind::ALL.len() {
            return;
        }
        let kind = loop {
            let candidate = ArtifactKind::ALL[self.rng.roll(0, 3) as usize];
            if !self.artifacts_granted.contains(&candidate) {
                break candidate;
            }
        };
        self.artifacts_granted.push(kind);
        let name = content::artifact_entity(kind, pos).name.clone();
        self.log.push(format!("The {name} drops to the ground!"), Tint::Pink);
        self.state.spawn(content::artifact_entity(kind, pos));
    }
}
