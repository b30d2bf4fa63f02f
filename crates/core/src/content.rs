//! Hardcoded content tables: balance constants, monster stat blocks,
//! leaders, player races, the loot roll table, and the artifact pool.

use crate::state::{Ai, Consumable, Entity, Fighter, Gear, Item, STAIRS_GLYPH};
use crate::types::{ArtifactKind, DeathKind, EquipSlot, Pos, Race, Tint};

pub const INVENTORY_CAPACITY: usize = 26;
pub const FINAL_DEPTH: u8 = 5;

// Combat.
pub const EVASION_CEILING: i32 = 50;

// Monster behavior: chance per turn of staying interested in a lost player,
// sampling radius for wander targets, confusion duration.
pub const AI_INTEREST: i32 = 98;
pub const WANDER_RADIUS: i32 = 20;
pub const CONFUSE_NUM_TURNS: i32 = 10;

// Spells.
pub const HEAL_AMOUNT: i32 = 10;
pub const RESTORE_MANA_AMOUNT: i32 = 10;
pub const LIGHTNING_DAMAGE: i32 = 20;
pub const LIGHTNING_RANGE: f64 = 5.0;
pub const LIGHTNING_COST: i32 = 3;
pub const CONFUSE_RANGE: f64 = 8.0;
pub const CONFUSE_COST: i32 = 2;
pub const FIREBALL_RADIUS: f64 = 3.0;
pub const FIREBALL_DAMAGE: i32 = 12;
pub const FIREBALL_COST: i32 = 4;
pub const ACID_ARROW_DAMAGE: i32 = 8;
pub const ACID_ARROW_RADIUS: f64 = 2.0;
pub const ACID_ARROW_COST: i32 = 2;
pub const MAGIC_MISSILE_DAMAGE: i32 = 6;
pub const MAGIC_MISSILE_RANGE: f64 = 10.0;
pub const MAGIC_MISSILE_COST: i32 = 1;
pub const BLINK_COST: i32 = 5;
pub const INVIGORATE_MAX_HP_BONUS: i32 = 15;

// Prayers and status effects.
pub const PRAYER_COST: i32 = 5;
pub const PRAYER_PIETY_THRESHOLD: i32 = 5;
pub const ENRAGE_POWER_BONUS: i32 = 15;
pub const ENRAGE_DEFENCE_BONUS: i32 = 10;
pub const ENRAGE_EVASION_BONUS: i32 = -5;
pub const CURSE_POWER_EFFECT: i32 = -10;
pub const CURSE_DEFENCE_EFFECT: i32 = -10;
pub const CURSE_EVASION_EFFECT: i32 = -10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Halfling,
    Gnome,
    Dwarf,
    Elf,
    Human,
}

struct MonsterBlock {
    glyph: char,
    name: &'static str,
    hp: i32,
    mana: i32,
    piety: i32,
    defence: i32,
    power: i32,
    evasion: i32,
}

/// Three strength tiers per species; `tier` is 1-based.
fn species_block(species: Species, tier: u8) -> MonsterBlock {
    match (species, tier) {
        (Species::Halfling, 1) => MonsterBlock { glyph: 'h', name: "halfling forager", hp: 6, mana: 10, piety: 10, defence: 5, power: 5, evasion: 15 },
        (Species::Halfling, 2) => MonsterBlock { glyph: 'h', name: "halfling thug", hp: 9, mana: 10, piety: 10, defence: 7, power: 7, evasion: 18 },
        (Species::Halfling, _) => MonsterBlock { glyph: 'h', name: "halfling warden", hp: 12, mana: 10, piety: 10, defence: 9, power: 9, evasion: 21 },
        (Species::Gnome, 1) => MonsterBlock { glyph: 'g', name: "gnome worker", hp: 10, mana: 15, piety: 15, defence: 7, power: 7, evasion: 10 },
        (Species::Gnome, 2) => MonsterBlock { glyph: 'g', name: "gnome sapper", hp: 13, mana: 15, piety: 15, defence: 9, power: 9, evasion: 12 },
        (Species::Gnome, _) => MonsterBlock { glyph: 'g', name: "gnome guard", hp: 16, mana: 15, piety: 15, defence: 11, power: 11, evasion: 14 },
        (Species::Dwarf, 1) => MonsterBlock { glyph: 'd', name: "dwarf miner", hp: 13, mana: 5, piety: 10, defence: 15, power: 15, evasion: 5 },
        (Species::Dwarf, 2) => MonsterBlock { glyph: 'd', name: "dwarf brute", hp: 17, mana: 5, piety: 10, defence: 18, power: 17, evasion: 5 },
        (Species::Dwarf, _) => MonsterBlock { glyph: 'd', name: "dwarf knight", hp: 21, mana: 5, piety: 10, defence: 21, power: 19, evasion: 5 },
        (Species::Elf, 1) => MonsterBlock { glyph: 'e', name: "elf scout", hp: 8, mana: 15, piety: 15, defence: 5, power: 7, evasion: 15 },
        (Species::Elf, 2) => MonsterBlock { glyph: 'e', name: "elf hunter", hp: 11, mana: 15, piety: 15, defence: 7, power: 9, evasion: 18 },
        (Species::Elf, _) => MonsterBlock { glyph: 'e', name: "elf duellist", hp: 14, mana: 15, piety: 15, defence: 9, power: 11, evasion: 21 },
        (Species::Human, 1) => MonsterBlock { glyph: 'H', name: "human recruit", hp: 12, mana: 10, piety: 10, defence: 10, power: 10, evasion: 10 },
        (Species::Human, 2) => MonsterBlock { glyph: 'H', name: "human soldier", hp: 16, mana: 10, piety: 10, defence: 12, power: 12, evasion: 12 },
        (Species::Human, _) => MonsterBlock { glyph: 'H', name: "human paladin", hp: 20, mana: 10, piety: 10, defence: 14, power: 14, evasion: 14 },
    }
}

fn tier_tint(tier: u8) -> Tint {
    match tier {
        1 => Tint::Yellow,
        2 => Tint::Green,
        _ => Tint::Sky,
    }
}

pub fn monster_entity(species: Species, tier: u8, pos: Pos) -> Entity {
    let block = species_block(species, tier);
    Entity {
        pos,
        glyph: block.glyph,
        name: block.name.to_string(),
        tint: tier_tint(tier),
        blocks: true,
        fighter: Some(Fighter::new(
            block.hp,
            block.mana,
            block.piety,
            block.defence,
            block.power,
            block.evasion,
            DeathKind::Monster,
        )),
        ai: Some(Ai::Pursuit { memory: None }),
        item: None,
    }
}

/// The guaranteed per-level boss. The final depth's leader ends the campaign
/// instead of dropping an artifact.
pub fn leader_entity(depth: u8, pos: Pos) -> Entity {
    let (glyph, name, fighter) = match depth {
        1 => ('h', "halfling elder", Fighter::new(16, 10, 10, 10, 10, 25, DeathKind::Leader)),
        2 => ('g', "gnome sergeant", Fighter::new(24, 15, 15, 14, 14, 10, DeathKind::Leader)),
        3 => ('e', "elf captain", Fighter::new(20, 15, 15, 10, 10, 30, DeathKind::Leader)),
        4 => ('d', "dwarf warleader", Fighter::new(32, 5, 10, 30, 30, 5, DeathKind::Leader)),
        _ => ('H', "human general", Fighter::new(28, 10, 10, 20, 20, 20, DeathKind::Victory)),
    };
    Entity {
        pos,
        glyph,
        name: name.to_string(),
        tint: Tint::Red,
        blocks: true,
        fighter: Some(fighter),
        ai: Some(Ai::Pursuit { memory: None }),
        item: None,
    }
}

pub fn player_entity(race: Race, pos: Pos) -> Entity {
    let (name, tint, fighter) = match race {
        Race::Orc => ("orc", Tint::Chartreuse, Fighter::new(40, 5, 15, 15, 20, 5, DeathKind::Player)),
        Race::Kobold => ("kobold", Tint::Red, Fighter::new(20, 15, 15, 5, 12, 30, DeathKind::Player)),
        Race::Goblin => ("goblin", Tint::Sea, Fighter::new(25, 30, 30, 10, 15, 15, DeathKind::Player)),
    };
    Entity {
        pos,
        glyph: '@',
        name: name.to_string(),
        tint,
        blocks: true,
        fighter: Some(fighter),
        ai: None,
        item: None,
    }
}

pub fn god_name(race: Race) -> &'static str {
    match race {
        Race::Orc => "Gruumsh",
        Race::Kobold => "Gaknulak",
        Race::Goblin => "Maglubiyet",
    }
}

pub fn stairs_entity(pos: Pos) -> Entity {
    Entity {
        pos,
        glyph: STAIRS_GLYPH,
        name: "stairs leading upwards".to_string(),
        tint: Tint::White,
        blocks: false,
        fighter: None,
        ai: None,
        item: None,
    }
}

fn item_entity(pos: Pos, glyph: char, name: &str, tint: Tint, item: Item) -> Entity {
    Entity {
        pos,
        glyph,
        name: name.to_string(),
        tint,
        blocks: false,
        fighter: None,
        ai: None,
        item: Some(item),
    }
}

fn weapon(pos: Pos, name: &str, tint: Tint, power: i32) -> Entity {
    let gear = Gear { slot: EquipSlot::Weapon, power: Some(power), defence: None, evasion: None };
    item_entity(pos, ')', name, tint, Item::Gear(gear))
}

fn armour(pos: Pos, name: &str, tint: Tint, defence: i32, evasion: i32) -> Entity {
    let gear =
        Gear { slot: EquipSlot::Armour, power: None, defence: Some(defence), evasion: Some(evasion) };
    item_entity(pos, ']', name, tint, Item::Gear(gear))
}

fn scroll(pos: Pos, name: &str, tint: Tint, effect: Consumable) -> Entity {
    item_entity(pos, '?', name, tint, Item::Consumable(effect))
}

/// Loot table keyed on a `0..=100` roll, cumulative thresholds as fixed
/// percentages: potions 50, scrolls 30, weapons 10, armours the rest.
pub fn loot_entity(dice: i32, pos: Pos) -> Entity {
    match dice {
        d if d < 30 => item_entity(pos, '!', "healing potion", Tint::Yellow, Item::Consumable(Consumable::Heal)),
        d if d < 50 => item_entity(pos, '!', "mana potion", Tint::Violet, Item::Consumable(Consumable::RestoreMana)),
        d if d < 55 => scroll(pos, "scroll of lightning bolt", Tint::White, Consumable::LightningBolt),
        d if d < 60 => scroll(pos, "scroll of fireball", Tint::Red, Consumable::Fireball),
        d if d < 65 => scroll(pos, "scroll of confusion", Tint::Green, Consumable::Confusion),
        d if d < 70 => scroll(pos, "scroll of acid arrow", Tint::Chartreuse, Consumable::AcidArrow),
        d if d < 75 => scroll(pos, "scroll of magic missile", Tint::Magenta, Consumable::MagicMissile),
        d if d < 80 => scroll(pos, "scroll of blink", Tint::Cyan, Consumable::Blink),
        d if d < 82 => weapon(pos, "club", Tint::Orange, 3),
        d if d < 84 => weapon(pos, "dagger", Tint::Sky, 4),
        d if d < 86 => weapon(pos, "short sword", Tint::Sky, 6),
        d if d < 88 => weapon(pos, "mace", Tint::Blue, 7),
        d if d < 90 => weapon(pos, "axe", Tint::Cyan, 9),
        d if d < 92 => armour(pos, "filthy tunic", Tint::Red, 2, 0),
        d if d < 94 => armour(pos, "leather armour", Tint::Orange, 3, -1),
        d if d < 96 => armour(pos, "ring mail armour", Tint::Blue, 4, -2),
        d if d < 98 => armour(pos, "chain mail armour", Tint::Sky, 6, -3),
        _ => armour(pos, "plate mail armour", Tint::Blue, 10, -5),
    }
}

pub fn artifact_entity(kind: ArtifactKind, pos: Pos) -> Entity {
    match kind {
        ArtifactKind::ScintillatingPhial => {
            item_entity(pos, '!', "scintillating phial", Tint::Green, Item::Consumable(Consumable::Invigorate))
        }
        ArtifactKind::GrislyTotem => item_entity(
            pos,
            '"',
            "grisly totem",
            Tint::Red,
            Item::Gear(Gear { slot: EquipSlot::Jewellery, power: None, defence: None, evasion: Some(15) }),
        ),
        ArtifactKind::GlowingBroadSword => weapon(pos, "glowing broad sword", Tint::Violet, 15),
        ArtifactKind::MithrilCoat => armour(pos, "mithril coat", Tint::Cyan, 15, 0),
    }
}
