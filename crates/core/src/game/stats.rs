//! Derived stat computation and timed status effects.

use crate::content::{
    CURSE_DEFENCE_EFFECT, CURSE_EVASION_EFFECT, CURSE_POWER_EFFECT, ENRAGE_DEFENCE_BONUS,
    ENRAGE_EVASION_BONUS, ENRAGE_POWER_BONUS,
};
use crate::state::{Gear, Item};
use crate::types::{EntityId, StatusEffect, Tint};

use super::Game;

impl Game {
    /// Rebuilds the player's derived stats from base values, equipped gear,
    /// and the active status effect. Idempotent; callers run it after every
    /// equipment or status change.
    pub(super) fn recompute_stats(&mut self) {
        let weapon = self.equipped_gear(self.weapon);
        let armour = self.equipped_gear(self.armour);
        let jewellery = self.equipped_gear(self.jewellery);
        let gear_sum = |pick: fn(&Gear) -> Option<i32>| {
            [weapon, armour, jewellery]
                .iter()
                .flatten()
                .filter_map(pick)
                .sum::<i32>()
        };
        let power_bonus = gear_sum(|gear| gear.power);
        let defence_bonus = gear_sum(|gear| gear.defence);
        let evasion_bonus = gear_sum(|gear| gear.evasion);

        let Some(fighter) = self.state.player_mut().fighter.as_mut() else { return };
        fighter.power = fighter.base_power + power_bonus;
        fighter.defence = fighter.base_defence + defence_bonus;
        fighter.evasion = fighter.base_evasion + evasion_bonus;
        match fighter.status {
            Some(StatusEffect::Enraged) => {
                fighter.power += ENRAGE_POWER_BONUS;
                fighter.defence += ENRAGE_DEFENCE_BONUS;
                fighter.evasion += ENRAGE_EVASION_BONUS;
            }
            Some(StatusEffect::Cursed) => {
                fighter.power += CURSE_POWER_EFFECT;
                fighter.defence += CURSE_DEFENCE_EFFECT;
                fighter.evasion += CURSE_EVASION_EFFECT;
            }
            Some(StatusEffect::Hidden) | None => {}
        }
        fighter.power = fighter.power.max(0);
        fighter.defence = fighter.defence.max(0);
        fighter.evasion = fighter.evasion.max(0);
    }

    fn equipped_gear(&self, id: Option<EntityId>) -> Option<Gear> {
        match id.and_then(|id| self.state.entities.get(id)).and_then(|entity| entity.item) {
            Some(Item::Gear(gear)) => Some(gear),
            _ => None,
        }
    }

    /// Counts the active status effect down by one turn and clears it on
    /// expiry. Runs once per consumed player turn.
    pub(super) fn tick_player_status(&mut self) {
        let Some(fighter) = self.state.player_mut().fighter.as_mut() else { return };
        if fighter.status.is_none() {
            return;
        }
        fighter.status_timer -= 1;
        if fighter.status_timer > 0 {
            return;
        }
        let was_curse = fighter.status == Some(StatusEffect::Cursed);
        fighter.status = None;
        fighter.status_timer = 0;
        if was_curse {
            self.log.push("The effects of the curse wear off.", Tint::Yellow);
        } else {
            self.log.push("The blessing of your god fades away.", Tint::Yellow);
        }
        self.recompute_stats();
    }

    /// Curses the given fighter. The player gets the timed status effect;
    /// monsters take a permanent floor-clamped stat reduction instead.
    pub(super) fn apply_curse(&mut self, id: EntityId) {
        if id == self.state.player_id {
            let duration = self.rng.roll(10, 30);
            if let Some(fighter) = self.state.player_mut().fighter.as_mut() {
                fighter.status = Some(StatusEffect::Cursed);
                fighter.status_timer = duration;
            }
            self.recompute_stats();
        } else if let Some(fighter) =
            self.state.entities.get_mut(id).and_then(|entity| entity.fighter.as_mut())
        {
            fighter.power = (fighter.base_power + CURSE_POWER_EFFECT).max(0);
            fighter.defence = (fighter.base_defence + CURSE_DEFENCE_EFFECT).max(0);
            fighter.evasion = (fighter.base_evasion + CURSE_EVASION_EFFECT).max(0);
        }
    }
}
