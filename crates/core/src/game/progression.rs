//! Climbing between levels and rebuilding state for the next depth.

use crate::mapgen::generate_level;
use crate::types::{Tint, TurnResult};

use super::Game;

impl Game {
    /// Climbs the stairs under the player, if any. The whole level behind
    /// them is discarded; only the player and their belongings persist.
    pub(super) fn ascend_stairs(&mut self) -> TurnResult {
        let player_pos = self.state.player().pos;
        let on_stairs = self
            .state
            .draw_order
            .iter()
            .any(|&id| self.state.entities[id].is_stairs() && self.state.entities[id].pos == player_pos);
        if !on_stairs {
            self.log.push("There is no way up here!", Tint::Red);
            return TurnResult::NotConsumed;
        }
        self.depth += 1;
        self.log.push("You climb up the stairs, deeper into the occupied caverns...", Tint::Red);
        self.advance_level();
        TurnResult::Consumed
    }

    fn advance_level(&mut self) {
        let mut kept = vec![self.state.player_id];
        kept.extend(self.inventory.iter().copied());
        kept.extend(self.weapon);
        kept.extend(self.armour);
        kept.extend(self.jewellery);
        self.state.entities.retain(|id, _| kept.contains(&id));

        let level = generate_level(&mut self.rng, self.depth);
        self.state.map = level.map;
        self.state.draw_order.clear();
        for entity in level.entities {
            let id = self.state.entities.insert(entity);
            self.state.draw_order.push(id);
        }
        let player_id = self.state.player_id;
        self.state.draw_order.push(player_id);
        self.state.entities[player_id].pos = level.player_start;
        self.refresh_fov();
    }
}
