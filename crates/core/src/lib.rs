//! Deterministic simulation core of a turn-based dungeon crawl. The player
//! leads one of three goblinoid races reclaiming their caverns from invading
//! "good" races, depth by depth, leader by leader.
//!
//! The crate owns generation, combat, AI, items, prayers, and progression.
//! Rendering, input, and field-of-view stay outside; hosts drive the
//! simulation through [`game::Game::handle_command`] and read state back
//! through the accessor surface.

pub mod content;
pub mod fov;
pub mod game;
pub mod log;
pub mod mapgen;
pub mod rng;
pub mod state;
pub mod types;

pub use fov::{FieldOfView, TORCH_RADIUS, line_between};
pub use game::{Game, StatsSnapshot, TargetSource};
pub use log::MessageLog;
pub use state::{Ai, Consumable, Entity, Fighter, GameState, Gear, Item, Map, Tile};
pub use types::{
    ArtifactKind, Command, DeathKind, EntityId, EquipSlot, GameStatus, Pos, Race, StatusEffect,
    Tint, TurnResult,
};
