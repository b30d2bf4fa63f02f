//! Scroll and potion effects, targeting, and the prayer system.

use crate::content::{
    self, ACID_ARROW_COST, ACID_ARROW_DAMAGE, ACID_ARROW_RADIUS, BLINK_COST, CONFUSE_COST,
    CONFUSE_NUM_TURNS, CONFUSE_RANGE, FIREBALL_COST, FIREBALL_DAMAGE, FIREBALL_RADIUS,
    HEAL_AMOUNT, LIGHTNING_COST, LIGHTNING_DAMAGE, LIGHTNING_RANGE, MAGIC_MISSILE_COST,
    MAGIC_MISSILE_DAMAGE, MAGIC_MISSILE_RANGE, PRAYER_COST, PRAYER_PIETY_THRESHOLD,
    RESTORE_MANA_AMOUNT,
};
use crate::log::capitalise;
use crate::state::{Ai, Consumable, Fighter};
use crate::types::{EntityId, Pos, Race, StatusEffect, Tint, TurnResult};

use super::{Game, TargetSource};

/// How a cast resolved. `Done` consumes the item and the turn. `Fizzled`
/// consumes the turn because resources were already spent, but keeps the
/// item. `NoEffect` aborts before any cost, keeping both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CastOutcome {
    Done,
    Fizzled,
    NoEffect,
}

impl Game {
    pub(super) fn cast(&mut self, effect: Consumable, targets: &mut dyn TargetSource) -> CastOutcome {
        match effect {
            Consumable::Heal => self.cast_heal(),
            Consumable::RestoreMana => self.cast_restore_mana(),
            Consumable::LightningBolt => self.cast_lightning(),
            Consumable::Fireball => self.cast_fireball(targets),
            Consumable::Confusion => self.cast_confuse(targets),
            Consumable::AcidArrow => self.cast_acid_arrow(targets),
            Consumable::MagicMissile => self.cast_magic_missile(targets),
            Consumable::Blink => self.cast_blink(targets),
            Consumable::Invigorate => self.cast_invigorate(),
        }
    }

    fn player_fighter_mut(&mut self) -> &mut Fighter {
        self.state.player_mut().fighter.as_mut().expect("player keeps a fighter")
    }

    fn afford_mana(&mut self, cost: i32) -> bool {
        if self.player_fighter_mut().mana < cost {
            self.log.push("Not enough mana!", Tint::Red);
            return false;
        }
        self.player_fighter_mut().spend_mana(cost);
        true
    }

    fn cast_heal(&mut self) -> CastOutcome {
        let fighter = self.player_fighter_mut();
        if fighter.hp == fighter.max_hp {
            self.log.push("You are already at full health.", Tint::Red);
            return CastOutcome::NoEffect;
        }
        fighter.heal(HEAL_AMOUNT);
        self.log.push("Your wounds start to feel better!", Tint::Yellow);
        CastOutcome::Done
    }

    fn cast_restore_mana(&mut self) -> CastOutcome {
        let fighter = self.player_fighter_mut();
        if fighter.mana == fighter.max_mana {
            self.log.push("You are already at full mana.", Tint::Red);
            return CastOutcome::NoEffect;
        }
        fighter.restore_mana(RESTORE_MANA_AMOUNT);
        self.log.push("You feel a surge of power!", Tint::Violet);
        CastOutcome::Done
    }

    fn cast_invigorate(&mut self) -> CastOutcome {
        let fighter = self.player_fighter_mut();
        fighter.max_hp += content::INVIGORATE_MAX_HP_BONUS;
        fighter.hp = fighter.max_hp;
        self.log.push("The sparkling liquid invigorates you!", Tint::Yellow);
        CastOutcome::Done
    }

    /// Self-targeting: strikes the closest visible enemy in range.
    fn cast_lightning(&mut self) -> CastOutcome {
        if !self.afford_mana(LIGHTNING_COST) {
            return CastOutcome::NoEffect;
        }
        let Some(target_id) = self.closest_monster(LIGHTNING_RANGE) else {
            self.log.push("No enemy is close enough to strike.", Tint::Red);
            return CastOutcome::Fizzled;
        };
        let name = self.state.entities[target_id].name.clone();
        self.log.push(
            format!(
                "A lightning bolt strikes the {name} with a loud thunder! \
                 The damage is {LIGHTNING_DAMAGE} hit points."
            ),
            Tint::Sky,
        );
        self.take_damage(target_id, LIGHTNING_DAMAGE);
        CastOutcome::Done
    }

    fn cast_magic_missile(&mut self, targets: &mut dyn TargetSource) -> CastOutcome {
        if !self.afford_mana(MAGIC_MISSILE_COST) {
            return CastOutcome::NoEffect;
        }
        self.log.push("Choose an enemy for the magic missile, or cancel.", Tint::Cyan);
        let Some(target_id) = self.pick_monster(targets, Some(MAGIC_MISSILE_RANGE)) else {
            return CastOutcome::Fizzled;
        };
        let name = self.state.entities[target_id].name.clone();
        self.log.push(
            format!(
                "A magic missile hits the {name} with a burst of energy! \
                 The damage is {MAGIC_MISSILE_DAMAGE} hit points."
            ),
            Tint::Sky,
        );
        self.take_damage(target_id, MAGIC_MISSILE_DAMAGE);
        CastOutcome::Done
    }

    fn cast_fireball(&mut self, targets: &mut dyn TargetSource) -> CastOutcome {
        if !self.afford_mana(FIREBALL_COST) {
            return CastOutcome::NoEffect;
        }
        self.log.push("Choose a tile for the fireball, or cancel.", Tint::Cyan);
        let Some(center) = self.pick_tile(targets, None) else {
            return CastOutcome::Fizzled;
        };
        self.log.push(
            format!(
                "The fireball explodes, burning everything within {} tiles!",
                FIREBALL_RADIUS as i32
            ),
            Tint::Orange,
        );
        self.area_damage(center, FIREBALL_RADIUS, FIREBALL_DAMAGE, "gets burned", Tint::Orange);
        CastOutcome::Done
    }

    fn cast_acid_arrow(&mut self, targets: &mut dyn TargetSource) -> CastOutcome {
        if !self.afford_mana(ACID_ARROW_COST) {
            return CastOutcome::NoEffect;
        }
        self.log.push("Choose a tile for the acid arrow, or cancel.", Tint::Cyan);
        let Some(center) = self.pick_tile(targets, None) else {
            return CastOutcome::Fizzled;
        };
        self.log.push(
            format!(
                "The acid arrow bursts, splashing everything within {} tiles!",
                ACID_ARROW_RADIUS as i32
            ),
            Tint::Chartreuse,
        );
        self.area_damage(center, ACID_ARROW_RADIUS, ACID_ARROW_DAMAGE, "gets scalded", Tint::Chartreuse);
        CastOutcome::Done
    }

    fn cast_confuse(&mut self, targets: &mut dyn TargetSource) -> CastOutcome {
        if !self.afford_mana(CONFUSE_COST) {
            return CastOutcome::NoEffect;
        }
        self.log.push("Choose an enemy to confuse, or cancel.", Tint::Cyan);
        let Some(target_id) = self.pick_monster(targets, Some(CONFUSE_RANGE)) else {
            return CastOutcome::Fizzled;
        };
        let entity = &mut self.state.entities[target_id];
        let previous = entity.ai.take().unwrap_or(Ai::Pursuit { memory: None });
        entity.ai =
            Some(Ai::Confused { previous: Box::new(previous), turns_left: CONFUSE_NUM_TURNS });
        let name = entity.name.clone();
        self.log.push(
            format!("The eyes of the {name} look vacant as it starts to stumble around!"),
            Tint::Green,
        );
        CastOutcome::Done
    }

    /// Teleports to the chosen tile. A blocked destination wastes the scroll
    /// but moves nothing.
    fn cast_blink(&mut self, targets: &mut dyn TargetSource) -> CastOutcome {
        if !self.afford_mana(BLINK_COST) {
            return CastOutcome::NoEffect;
        }
        self.log.push("Choose a destination, or cancel.", Tint::Cyan);
        let Some(dest) = self.pick_tile(targets, None) else {
            return CastOutcome::Fizzled;
        };
        if self.state.is_blocked(dest) {
            self.log.push("The destination is blocked!", Tint::Red);
            return CastOutcome::Done;
        }
        self.state.player_mut().pos = dest;
        self.log.push("The world blurs and you are somewhere else!", Tint::Cyan);
        CastOutcome::Done
    }

    /// Damages every fighter within `radius` of `center`, the player
    /// included.
    fn area_damage(&mut self, center: Pos, radius: f64, damage: i32, verb: &str, tint: Tint) {
        for id in self.state.entity_ids() {
            let Some(entity) = self.state.entities.get(id) else { continue };
            if entity.fighter.is_none() || entity.pos.distance(center) > radius {
                continue;
            }
            let name = entity.name.clone();
            self.log.push(format!("The {name} {verb} for {damage} hit points."), tint);
            self.take_damage(id, damage);
        }
    }

    /// Keeps asking the source until it yields a visible tile inside
    /// `max_range`, or `None` for a cancel.
    fn pick_tile(&mut self, targets: &mut dyn TargetSource, max_range: Option<f64>) -> Option<Pos> {
        let origin = self.state.player().pos;
        loop {
            let pos = targets.pick_tile()?;
            let in_range = max_range.is_none_or(|range| origin.distance(pos) <= range);
            if in_range && self.fov.is_visible(pos) {
                return Some(pos);
            }
        }
    }

    /// Like `pick_tile`, but the accepted tile must hold a living enemy.
    fn pick_monster(
        &mut self,
        targets: &mut dyn TargetSource,
        max_range: Option<f64>,
    ) -> Option<EntityId> {
        loop {
            let pos = self.pick_tile(targets, max_range)?;
            let found = self.state.entity_ids().into_iter().find(|&id| {
                id != self.state.player_id
                    && self.state.entities[id].fighter.is_some()
                    && self.state.entities[id].pos == pos
            });
            if found.is_some() {
                return found;
            }
        }
    }

    fn closest_monster(&self, max_range: f64) -> Option<EntityId> {
        let origin = self.state.player().pos;
        let mut best = None;
        let mut best_distance = max_range + 1.0;
        for &id in &self.state.draw_order {
            if id == self.state.player_id {
                continue;
            }
            let Some(entity) = self.state.entities.get(id) else { continue };
            if entity.fighter.is_none() || !self.fov.is_visible(entity.pos) {
                continue;
            }
            let distance = origin.distance(entity.pos);
            if distance < best_distance {
                best = Some(id);
                best_distance = distance;
            }
        }
        best
    }

    /// Calls on the player's god. Low piety angers the god and curses the
    /// supplicant; otherwise the effect depends on race. The attempt always
    /// takes the turn.
    pub(super) fn pray(&mut self) -> TurnResult {
        let god = content::god_name(self.race);
        self.log.push(format!("You call upon {god} for help!"), Tint::Yellow);
        if self.player_fighter_mut().piety < PRAYER_PIETY_THRESHOLD {
            self.player_fighter_mut().piety = 0;
            self.log.push(format!("{god} is angered by your lack of devotion!"), Tint::Red);
            self.log.push("You feel the weight of an ancient curse!", Tint::Red);
            let player_id = self.state.player_id;
            self.apply_curse(player_id);
            return TurnResult::Consumed;
        }
        match self.race {
            Race::Orc => self.buff_prayer(
                god,
                StatusEffect::Enraged,
                "You become enraged and consumed by war lust!",
                Tint::Red,
            ),
            Race::Kobold => self.buff_prayer(
                god,
                StatusEffect::Hidden,
                "You slip into the shadows, unseen by your enemies!",
                Tint::Grey,
            ),
            Race::Goblin => self.goblin_prayer(god),
        }
        TurnResult::Consumed
    }

    fn buff_prayer(&mut self, god: &str, effect: StatusEffect, narration: &str, tint: Tint) {
        if self.player_fighter_mut().status == Some(effect) {
            self.log.push(format!("{god} is already aiding you!"), Tint::Yellow);
            return;
        }
        let duration = self.rng.roll(10, 15);
        let fighter = self.player_fighter_mut();
        fighter.spend_piety(PRAYER_COST);
        fighter.status = Some(effect);
        fighter.status_timer = duration;
        self.log.push(format!("{god} is pleased by your ongoing worship!"), Tint::Yellow);
        self.log.push(narration.to_string(), tint);
        self.recompute_stats();
    }

    /// The goblin god curses every enemy the player can see.
    fn goblin_prayer(&mut self, god: &str) {
        self.player_fighter_mut().spend_piety(PRAYER_COST);
        self.log.push(format!("{god} is pleased by your ongoing worship!"), Tint::Yellow);
        for id in self.state.entity_ids() {
            if id == self.state.player_id {
                continue;
            }
            let Some(entity) = self.state.entities.get(id) else { continue };
            if entity.fighter.is_none() || !self.fov.is_visible(entity.pos) {
                continue;
            }
            let name = entity.name.clone();
            self.apply_curse(id);
            self.log.push(format!("{} is cursed by {god}!", capitalise(&name)), Tint::Violet);
        }
    }
}
