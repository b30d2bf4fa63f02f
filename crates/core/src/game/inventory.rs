//! Carrying, using, equipping, and dropping items.

use crate::content::INVENTORY_CAPACITY;
use crate::state::Item;
use crate::types::{EquipSlot, Tint, TurnResult};

use super::abilities::CastOutcome;
use super::{Game, TargetSource};

impl Game {
    /// Picks up the topmost item on the player's tile. The entity stays in
    /// the slot map but leaves the draw order while carried.
    pub(super) fn pick_up(&mut self) -> TurnResult {
        let player_pos = self.state.player().pos;
        let found = self.state.draw_order.iter().rev().copied().find(|&id| {
            self.state.entities[id].item.is_some() && self.state.entities[id].pos == player_pos
        });
        let Some(id) = found else {
            self.log.push("There is nothing here to pick up.", Tint::White);
            return TurnResult::NotConsumed;
        };
        let name = self.state.entities[id].name.clone();
        if self.inventory.len() >= INVENTORY_CAPACITY {
            self.log.push(format!("Your inventory is full, cannot pick up {name}."), Tint::Red);
            return TurnResult::NotConsumed;
        }
        self.state.draw_order.retain(|&other| other != id);
        self.inventory.push(id);
        self.log.push(format!("You picked up a {name}!"), Tint::Green);
        TurnResult::Consumed
    }

    pub(super) fn drop_item(&mut self, index: usize) -> TurnResult {
        if index >= self.inventory.len() {
            return TurnResult::NotConsumed;
        }
        let id = self.inventory.remove(index);
        let player_pos = self.state.player().pos;
        self.state.entities[id].pos = player_pos;
        self.state.send_to_back(id);
        let name = self.state.entities[id].name.clone();
        self.log.push(format!("You dropped a {name}."), Tint::Yellow);
        TurnResult::Consumed
    }

    /// Routes a selected inventory item: consumables cast, gear equips.
    pub(super) fn use_item(&mut self, index: usize, targets: &mut dyn TargetSource) -> TurnResult {
        let Some(&id) = self.inventory.get(index) else {
            return TurnResult::NotConsumed;
        };
        match self.state.entities[id].item {
            Some(Item::Consumable(effect)) => match self.cast(effect, targets) {
                CastOutcome::Done => {
                    self.inventory.retain(|&other| other != id);
                    self.state.entities.remove(id);
                    TurnResult::Consumed
                }
                CastOutcome::Fizzled => TurnResult::Consumed,
                CastOutcome::NoEffect => TurnResult::NotConsumed,
            },
            Some(Item::Gear(gear)) => {
                self.equip(index, gear.slot);
                TurnResult::Consumed
            }
            None => {
                let name = self.state.entities[id].name.clone();
                self.log.push(format!("The {name} cannot be used."), Tint::White);
                TurnResult::NotConsumed
            }
        }
    }

    /// Equips from the inventory, swapping anything already in the slot back
    /// into the bag. The swap can never overflow because the incoming item
    /// frees its own space.
    fn equip(&mut self, index: usize, slot: EquipSlot) {
        let id = self.inventory.remove(index);
        let previous = match slot {
            EquipSlot::Weapon => self.weapon.replace(id),
            EquipSlot::Armour => self.armour.replace(id),
            EquipSlot::Jewellery => self.jewellery.replace(id),
        };
        if let Some(old) = previous {
            let old_name = self.state.entities[old].name.clone();
            self.inventory.push(old);
            self.log.push(format!("You put away the {old_name}."), Tint::Red);
        }
        let name = self.state.entities[id].name.clone();
        match slot {
            EquipSlot::Weapon => self.log.push(format!("You wield the {name}."), Tint::Red),
            EquipSlot::Armour | EquipSlot::Jewellery => {
                self.log.push(format!("You put on the {name}."), Tint::Red);
            }
        }
        self.recompute_stats();
    }

    /// Moves equipped gear back into the inventory, refusing when the bag
    /// is already full.
    pub(super) fn unequip(&mut self, slot: EquipSlot) -> TurnResult {
        let equipped = match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Armour => self.armour,
            EquipSlot::Jewellery => self.jewellery,
        };
        let Some(id) = equipped else {
            self.log.push("Nothing is equipped there.", Tint::White);
            return TurnResult::NotConsumed;
        };
        if self.inventory.len() >= INVENTORY_CAPACITY {
            self.log.push("Your inventory is too full to take that off.", Tint::Red);
            return TurnResult::NotConsumed;
        }
        match slot {
            EquipSlot::Weapon => self.weapon = None,
            EquipSlot::Armour => self.armour = None,
            EquipSlot::Jewellery => self.jewellery = None,
        }
        self.inventory.push(id);
        let name = self.state.entities[id].name.clone();
        match slot {
            EquipSlot::Weapon => self.log.push(format!("You put away the {name}."), Tint::Red),
            EquipSlot::Armour | EquipSlot::Jewellery => {
                self.log.push(format!("You take off the {name}."), Tint::Red);
            }
        }
        self.recompute_stats();
        TurnResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{arena_game, give_consumable, give_gear, place_loot, NoTargets};
    use super::*;
    use crate::state::Consumable;
    use crate::types::Race;
    use crate::types::Command;

    #[test]
    fn pick_up_moves_the_item_off_the_floor_into_the_bag() {
        let mut game = arena_game(Race::Orc);
        let player_pos = game.state().player().pos;
        let id = place_loot(&mut game, 0, player_pos);
        let mut targets = NoTargets;
        let result = game.handle_command(Command::PickUp, &mut targets);
        assert_eq!(result, TurnResult::Consumed);
        assert_eq!(game.inventory(), &[id]);
        assert!(!game.state().draw_order.contains(&id));
        assert!(game.state().entities.contains_key(id), "the entity itself survives");
    }

    #[test]
    fn pick_up_on_a_bare_tile_costs_nothing() {
        let mut game = arena_game(Race::Orc);
        let mut targets = NoTargets;
        assert_eq!(game.handle_command(Command::PickUp, &mut targets), TurnResult::NotConsumed);
        assert!(game.inventory().is_empty());
    }

    #[test]
    fn a_full_bag_refuses_the_twenty_seventh_item() {
        let mut game = arena_game(Race::Orc);
        for _ in 0..INVENTORY_CAPACITY {
            give_consumable(&mut game, Consumable::Heal);
        }
        let player_pos = game.state().player().pos;
        place_loot(&mut game, 0, player_pos);
        let mut targets = NoTargets;
        let result = game.handle_command(Command::PickUp, &mut targets);
        assert_eq!(result, TurnResult::NotConsumed);
        assert_eq!(game.inventory().len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn dropping_returns_the_item_to_the_player_tile() {
        let mut game = arena_game(Race::Orc);
        give_consumable(&mut game, Consumable::Heal);
        let id = game.inventory()[0];
        let mut targets = NoTargets;
        let result = game.handle_command(Command::DropItem { index: 0 }, &mut targets);
        assert_eq!(result, TurnResult::Consumed);
        assert!(game.inventory().is_empty());
        assert_eq!(game.state().entities[id].pos, game.state().player().pos);
        assert!(game.state().draw_order.contains(&id));
    }

    #[test]
    fn equipping_swaps_the_previous_item_back_into_the_bag() {
        let mut game = arena_game(Race::Orc);
        let first = give_gear(&mut game, EquipSlot::Weapon, Some(3), None, None);
        let second = give_gear(&mut game, EquipSlot::Weapon, Some(9), None, None);
        let mut targets = NoTargets;
        game.handle_command(Command::UseItem { index: 0 }, &mut targets);
        assert_eq!(game.equipped(EquipSlot::Weapon), Some(first));
        game.handle_command(Command::UseItem { index: 0 }, &mut targets);
        assert_eq!(game.equipped(EquipSlot::Weapon), Some(second));
        assert_eq!(game.inventory(), &[first], "the old weapon is back in the bag");
        let base_power = game.state().player().fighter.as_ref().map(|f| f.base_power);
        assert_eq!(game.player_stats().power, base_power.map(|p| p + 9).expect("alive"));
    }

    #[test]
    fn unequip_refuses_when_the_bag_is_full() {
        let mut game = arena_game(Race::Orc);
        give_gear(&mut game, EquipSlot::Jewellery, None, None, Some(15));
        let mut targets = NoTargets;
        game.handle_command(Command::UseItem { index: 0 }, &mut targets);
        for _ in 0..INVENTORY_CAPACITY {
            give_consumable(&mut game, Consumable::Heal);
        }
        let result = game.handle_command(Command::Unequip { slot: EquipSlot::Jewellery }, &mut targets);
        assert_eq!(result, TurnResult::NotConsumed);
        assert!(game.equipped(EquipSlot::Jewellery).is_some(), "still worn");
    }

    #[test]
    fn unequip_on_an_empty_slot_costs_nothing() {
        let mut game = arena_game(Race::Orc);
        let mut targets = NoTargets;
        let result = game.handle_command(Command::Unequip { slot: EquipSlot::Weapon }, &mut targets);
        assert_eq!(result, TurnResult::NotConsumed);
    }

    #[test]
    fn used_consumables_vanish_from_the_world_entirely() {
        let mut game = arena_game(Race::Orc);
        if let Some(fighter) = game.state.player_mut().fighter.as_mut() {
            fighter.hp -= 5;
        }
        give_consumable(&mut game, Consumable::Heal);
        let id = game.inventory()[0];
        let mut targets = NoTargets;
        game.handle_command(Command::UseItem { index: 0 }, &mut targets);
        assert!(!game.state().entities.contains_key(id));
    }
}
