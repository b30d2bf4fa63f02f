//! Shared harness for integration tests: a host-side field of view, scripted
//! and seeded command sources, and a canonical state encoding for hashing.
#![allow(dead_code)]

use core::{Command, EquipSlot, FieldOfView, Game, GameStatus, Map, Pos, Race, TargetSource};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Straight-line raycast visibility, the simplest thing a host could wire in.
#[derive(Default)]
pub struct RayFov {
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
                let line = core::line_between(origin, pos);
                let clear = line
                    .iter()
                    .take(line.len().saturating_sub(1))
                    .all(|&step| !map.blocks_sight(step));
                if clear && (light_walls || !map.blocks_sight(pos)) {
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

pub fn new_game(seed: u64, race: Race) -> Game {
    Game::new(seed, race, Box::new(RayFov::default()))
}

/// Cancels every targeting prompt.
pub struct NoTargets;

impl TargetSource for NoTargets {
    fn pick_tile(&mut self) -> Option<Pos> {
        None
    }
}

/// Picks tiles near the player from a seeded stream, cancelling after a
/// bounded number of rejected attempts so casts cannot spin forever.
pub struct SeededTargets {
    rng: ChaCha8Rng,
    around: Pos,
    attempts_left: u32,
}

impl SeededTargets {
    pub fn new(seed: u64, around: Pos) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), around, attempts_left: 32 }
    }
}

impl TargetSource for SeededTargets {
    fn pick_tile(&mut self) -> Option<Pos> {
        if self.attempts_left == 0 {
            return None;
        }
        self.attempts_left -= 1;
        let dy = (self.rng.next_u64() % 9) as i32 - 4;
        let dx = (self.rng.next_u64() % 9) as i32 - 4;
        Some(self.around.offset(dx, dy))
    }
}

/// Draws a random playable command from a seeded stream. Weighted toward
/// movement the way a real session is.
pub fn random_command(rng: &mut ChaCha8Rng, game: &Game) -> Command {
    match rng.next_u64() % 10 {
        0 => Command::Wait,
        1 => Command::PickUp,
        2 => Command::Pray,
        3 => Command::Ascend,
        4 if !game.inventory().is_empty() => {
            let index = (rng.next_u64() as usize) % game.inventory().len();
            Command::UseItem { index }
        }
        5 if !game.inventory().is_empty() => {
            let index = (rng.next_u64() as usize) % game.inventory().len();
            Command::DropItem { index }
        }
        6 => Command::Unequip { slot: EquipSlot::Weapon },
        _ => {
            let dx = (rng.next_u64() % 3) as i32 - 1;
            let dy = (rng.next_u64() % 3) as i32 - 1;
            Command::Move { dx, dy }
        }
    }
}

/// Plays `turns` random commands, stopping early when the campaign ends.
pub fn play_random(game: &mut Game, seed: u64, turns: u32) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..turns {
        if game.status() != GameStatus::Playing {
            break;
        }
        let command = random_command(&mut rng, game);
        let player_pos = game.state().player().pos;
        let mut targets = SeededTargets::new(rng.next_u64(), player_pos);
        game.handle_command(command, &mut targets);
    }
}

/// Canonical byte encoding of everything observable about a campaign, for
/// whole-run hash comparison.
pub fn encode_game(game: &Game) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.push(game.depth());
    bytes.push(match game.status() {
        GameStatus::Playing => 0,
        GameStatus::Dead => 1,
        GameStatus::Won => 2,
    });
    let stats = game.player_stats();
    for value in [
        stats.hp,
        stats.max_hp,
        stats.mana,
        stats.max_mana,
        stats.piety,
        stats.max_piety,
        stats.power,
        stats.defence,
        stats.evasion,
    ] {
        bytes.extend(value.to_le_bytes());
    }
    bytes.extend((game.inventory().len() as u32).to_le_bytes());
    for &id in game.state().draw_order.iter() {
        let entity = &game.state().entities[id];
        bytes.push(entity.glyph as u8);
        bytes.extend(entity.pos.y.to_le_bytes());
        bytes.extend(entity.pos.x.to_le_bytes());
        bytes.push(u8::from(entity.blocks));
        if let Some(fighter) = &entity.fighter {
            bytes.extend(fighter.hp.to_le_bytes());
            bytes.extend(fighter.power.to_le_bytes());
        }
        bytes.extend(entity.name.as_bytes());
    }
    for (line, _) in game.log().lines() {
        bytes.extend(line.as_bytes());
        bytes.push(b'\n');
    }
    bytes
}
