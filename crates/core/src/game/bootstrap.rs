//! Campaign construction: first level, player placement, opening messages.

use slotmap::SlotMap;

use crate::content;
use crate::fov::FieldOfView;
use crate::log::MessageLog;
use crate::mapgen::generate_level;
use crate::rng::GameRng;
use crate::state::GameState;
use crate::types::{GameStatus, Race, Tint};

use super::Game;

impl Game {
    /// Starts a new campaign at depth 1. The same seed, race, and command
    /// sequence always reproduce the same campaign.
    pub fn new(seed: u64, race: Race, fov: Box<dyn FieldOfView>) -> Self {
        let mut rng = GameRng::seed_from(seed);
        let level = generate_level(&mut rng, 1);

        let mut entities = SlotMap::with_key();
        let mut draw_order = Vec::with_capacity(level.entities.len() + 1);
        for entity in level.entities {
            draw_order.push(entities.insert(entity));
        }
        let player_id = entities.insert(content::player_entity(race, level.player_start));
        draw_order.push(player_id);

        let mut game = Self {
            rng,
            state: GameState { map: level.map, entities, draw_order, player_id },
            depth: 1,
            race,
            status: GameStatus::Playing,
            inventory: Vec::new(),
            weapon: None,
            armour: None,
            jewellery: None,
            artifacts_granted: Vec::new(),
            log: MessageLog::default(),
            fov,
        };
        game.log.push("The time for vengeance is at hand! Butcher the invaders!", Tint::Red);
        game.log.push("(If this is your first time, press \"?\" for instructions.)", Tint::White);
        game.refresh_fov();
        game
    }
}
