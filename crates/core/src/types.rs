use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos { y: self.y + dy, x: self.x + dx }
    }

    /// Euclidean distance, used for combat ranges and area effects.
    pub fn distance(self, other: Pos) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armour,
    Jewellery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEffect {
    Enraged,
    Hidden,
    Cursed,
}

/// What happens when a fighter's hit points reach zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathKind {
    Player,
    Monster,
    Leader,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    Orc,
    Kobold,
    Goblin,
}

/// Unique leader drops, each granted at most once per campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactKind {
    ScintillatingPhial,
    GrislyTotem,
    GlowingBroadSword,
    MithrilCoat,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::ScintillatingPhial,
        ArtifactKind::GrislyTotem,
        ArtifactKind::GlowingBroadSword,
        ArtifactKind::MithrilCoat,
    ];
}

/// Display color for glyphs and log lines. The renderer maps these to
/// whatever palette it uses; the core only records intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    White,
    Grey,
    Red,
    Orange,
    Yellow,
    Green,
    Chartreuse,
    Sea,
    Cyan,
    Sky,
    Blue,
    Violet,
    Magenta,
    Pink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move { dx: i32, dy: i32 },
    Wait,
    PickUp,
    UseItem { index: usize },
    DropItem { index: usize },
    Unequip { slot: EquipSlot },
    Pray,
    Ascend,
    Help,
    Quit,
}

/// Whether a command advanced the simulation. Monsters act only after a
/// consumed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    Consumed,
    NotConsumed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Dead,
    Won,
}
