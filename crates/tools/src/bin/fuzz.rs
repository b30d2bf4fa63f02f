//! Random-play harness: hammers a campaign with seeded commands and checks
//! core invariants after every turn.

use anyhow::Result;
use clap::Parser;
use game_core::{
    Command, EquipSlot, FieldOfView, Game, GameStatus, Map, Pos, Race, TargetSource, line_between,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    turns: u32,
}

#[derive(Default)]
struct RayFov {
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
                let line = line_between(origin, pos);
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

/// Picks random tiles near a point, giving up after a bounded number of
/// rejections so targeted casts cannot spin.
struct SeededTargets {
    rng: ChaCha8Rng,
    around: Pos,
    attempts_left: u32,
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

fn random_command(rng: &mut ChaCha8Rng, game: &Game) -> Command {
    match rng.next_u64() % 10 {
        0 => Command::Wait,
        1 => Command::PickUp,
        2 => Command::Pray,
        3 => Command::Ascend,
        4 if !game.inventory().is_empty() => {
            Command::UseItem { index: (rng.next_u64() as usize) % game.inventory().len() }
        }
        5 if !game.inventory().is_empty() => {
            Command::DropItem { index: (rng.next_u64() as usize) % game.inventory().len() }
        }
        6 => Command::Unequip { slot: EquipSlot::Weapon },
        _ => {
            let dx = (rng.next_u64() % 3) as i32 - 1;
            let dy = (rng.next_u64() % 3) as i32 - 1;
            Command::Move { dx, dy }
        }
    }
}

fn check_invariants(game: &Game) {
    let stats = game.player_stats();
    assert!(stats.hp >= 0 && stats.hp <= stats.max_hp, "hp out of bounds");
    assert!(stats.mana >= 0 && stats.mana <= stats.max_mana, "mana out of bounds");
    assert!(stats.piety >= 0 && stats.piety <= stats.max_piety, "piety out of bounds");

    let state = game.state();
    for &id in state.draw_order.iter() {
        let entity = &state.entities[id];
        if entity.blocks {
            assert!(!state.map.is_blocked_tile(entity.pos), "blocker standing in a wall");
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Fuzzing seed {} for up to {} turns...", args.seed, args.turns);
    let races = [Race::Orc, Race::Kobold, Race::Goblin];
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let race = races[rng.next_u64() as usize % races.len()];
    let mut game = Game::new(args.seed, race, Box::new(RayFov::default()));

    let mut played = 0;
    for _ in 0..args.turns {
        if game.status() != GameStatus::Playing {
            break;
        }
        let command = random_command(&mut rng, &game);
        let mut targets = SeededTargets {
            rng: ChaCha8Rng::seed_from_u64(rng.next_u64()),
            around: game.state().player().pos,
            attempts_left: 32,
        };
        game.handle_command(command, &mut targets);
        check_invariants(&game);
        played += 1;
    }

    println!(
        "Played {played} turns as {race:?}: depth {}, status {:?}",
        game.depth(),
        game.status()
    );
    Ok(())
}
