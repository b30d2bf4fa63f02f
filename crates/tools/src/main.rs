//! Replays a recorded command script against a seeded campaign and prints a
//! JSON summary of where it ended up.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{
    Command, FieldOfView, Game, GameStatus, Map, Pos, Race, TargetSource, line_between,
};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file holding an array of commands
    #[arg(short, long)]
    script: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = RaceArg::Goblin)]
    race: RaceArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RaceArg {
    Orc,
    Kobold,
    Goblin,
}

impl From<RaceArg> for Race {
    fn from(arg: RaceArg) -> Race {
        match arg {
            RaceArg::Orc => Race::Orc,
            RaceArg::Kobold => Race::Kobold,
            RaceArg::Goblin => Race::Goblin,
        }
    }
}

/// Straight-line raycast visibility, good enough for headless replay.
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

/// Scripted replays carry no targeting picks, so every prompt cancels.
struct CancelTargets;

impl TargetSource for CancelTargets {
    fn pick_tile(&mut self) -> Option<Pos> {
        None
    }
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    commands: usize,
    depth: u8,
    status: GameStatus,
    hp: i32,
    max_hp: i32,
    inventory: usize,
    last_message: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let script_data = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script file: {}", args.script))?;
    let commands: Vec<Command> =
        serde_json::from_str(&script_data).context("failed to deserialize command script")?;

    let mut game = Game::new(args.seed, args.race.into(), Box::new(RayFov::default()));
    let mut targets = CancelTargets;
    let mut executed = 0;
    for &command in &commands {
        if game.status() != GameStatus::Playing {
            break;
        }
        game.handle_command(command, &mut targets);
        executed += 1;
    }

    let stats = game.player_stats();
    let summary = Summary {
        seed: args.seed,
        commands: executed,
        depth: game.depth(),
        status: game.status(),
        hp: stats.hp,
        max_hp: stats.max_hp,
        inventory: game.inventory().len(),
        last_message: game.log().latest().map(|(line, _)| line.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
