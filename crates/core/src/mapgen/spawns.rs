//! Room population: monster and item placement rules plus the per-level
//! leader.

use crate::content::{self, Species};
use crate::rng::GameRng;
use crate::state::{Entity, Map};
use crate::types::Pos;

use super::layout::RoomRect;
use super::{MAX_ROOM_ITEMS, MAX_ROOM_MONSTERS};

/// A spot is taken when the tile blocks or a blocking entity already sits
/// there. Loose items never block, so items may share a tile.
fn spot_taken(map: &Map, entities: &[Entity], pos: Pos) -> bool {
    map.is_blocked_tile(pos) || entities.iter().any(|entity| entity.blocks && entity.pos == pos)
}

/// Fills each accepted room with a random count of monsters and items.
/// Placement failures are silent; they only reduce content density. Items
/// are inserted at the back of the draw order so monsters render above them.
pub(super) fn populate_rooms(
    rng: &mut GameRng,
    depth: u8,
    map: &Map,
    rooms: &[RoomRect],
    player_start: Pos,
) -> Vec<Entity> {
    let mut entities: Vec<Entity> = Vec::new();
    for room in rooms {
        let monster_count = rng.roll(0, MAX_ROOM_MONSTERS);
        for _ in 0..monster_count {
            let pos = sample_in_room(rng, room);
            if spot_taken(map, &entities, pos) || pos == player_start {
                continue;
            }
            let species = roll_species(rng);
            let tier = roll_tier(rng, depth, species);
            entities.push(content::monster_entity(species, tier, pos));
        }

        let item_count = rng.roll(0, MAX_ROOM_ITEMS);
        for _ in 0..item_count {
            let pos = sample_in_room(rng, room);
            if spot_taken(map, &entities, pos) {
                continue;
            }
            let dice = rng.roll(0, 100);
            entities.insert(0, content::loot_entity(dice, pos));
        }
    }
    entities
}

fn sample_in_room(rng: &mut GameRng, room: &RoomRect) -> Pos {
    Pos { y: rng.roll(room.y1 + 1, room.y2 - 1), x: rng.roll(room.x1 + 1, room.x2 - 1) }
}

/// Even five-way species split.
fn roll_species(rng: &mut GameRng) -> Species {
    match rng.roll(0, 100) {
        d if d < 20 => Species::Halfling,
        d if d < 40 => Species::Gnome,
        d if d < 60 => Species::Dwarf,
        d if d < 80 => Species::Elf,
        _ => Species::Human,
    }
}

/// Strength tier scaled by depth: the roll window slides upward as the
/// campaign deepens, so deeper levels favor stronger tiers.
fn roll_tier(rng: &mut GameRng, depth: u8, species: Species) -> u8 {
    let depth = i32::from(depth);
    let dice = if species == Species::Halfling {
        rng.roll(depth, depth * 4 + 5)
    } else {
        rng.roll(depth * 2, depth * 4 + 5)
    };
    if dice < 8 {
        1
    } else if dice < 16 {
        2
    } else {
        3
    }
}

/// Places the single leader, resampling until an open tile is found.
pub(super) fn place_leader(
    rng: &mut GameRng,
    depth: u8,
    map: &Map,
    entities: &[Entity],
    player_start: Pos,
) -> Entity {
    let mut pos = Pos { y: 0, x: 0 };
    while spot_taken(map, entities, pos) || pos == player_start {
        pos = Pos {
            y: rng.roll(1, map.height as i32 - 1),
            x: rng.roll(1, map.width as i32 - 1),
        };
    }
    content::leader_entity(depth, pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::layout::carve_room;
    use crate::types::DeathKind;

    fn carved_room_map() -> (Map, RoomRect) {
        let mut map = Map::new(30, 30);
        let room = RoomRect::new(2, 2, 12, 12);
        carve_room(&mut map, room);
        (map, room)
    }

    #[test]
    fn populated_monsters_sit_on_open_tiles_inside_the_room() {
        let (map, room) = carved_room_map();
        let mut rng = GameRng::seed_from(11);
        let start = room.center();
        // Several passes so at least one roll produces monsters.
        for _ in 0..16 {
            let entities = populate_rooms(&mut rng, 1, &map, &[room], start);
            for entity in entities.iter().filter(|entity| entity.blocks) {
                assert!(!map.is_blocked_tile(entity.pos));
                assert_ne!(entity.pos, start);
                assert!(entity.pos.x > room.x1 && entity.pos.x < room.x2);
                assert!(entity.pos.y > room.y1 && entity.pos.y < room.y2);
            }
        }
    }

    #[test]
    fn no_two_blocking_entities_share_a_tile() {
        let (map, room) = carved_room_map();
        let mut rng = GameRng::seed_from(5);
        for _ in 0..16 {
            let entities = populate_rooms(&mut rng, 3, &map, &[room], room.center());
            let blockers: Vec<Pos> =
                entities.iter().filter(|entity| entity.blocks).map(|entity| entity.pos).collect();
            for (i, a) in blockers.iter().enumerate() {
                assert!(!blockers[i + 1..].contains(a), "two blockers share {a:?}");
            }
        }
    }

    #[test]
    fn leader_lands_on_an_open_tile_away_from_the_start() {
        let (map, room) = carved_room_map();
        let mut rng = GameRng::seed_from(23);
        let start = room.center();
        for depth in 1..=5 {
            let leader = place_leader(&mut rng, depth, &map, &[], start);
            assert!(!map.is_blocked_tile(leader.pos));
            assert_ne!(leader.pos, start);
            let expected = if depth == 5 { DeathKind::Victory } else { DeathKind::Leader };
            assert_eq!(leader.fighter.as_ref().map(|fighter| fighter.death), Some(expected));
        }
    }

    #[test]
    fn deeper_levels_never_roll_weaker_tier_windows() {
        let mut rng = GameRng::seed_from(2);
        let mut shallow = [0_u32; 3];
        let mut deep = [0_u32; 3];
        for _ in 0..500 {
            shallow[usize::from(roll_tier(&mut rng, 1, Species::Gnome)) - 1] += 1;
            deep[usize::from(roll_tier(&mut rng, 5, Species::Gnome)) - 1] += 1;
        }
        // Depth 5 rolls from 10..=25, so tier 1 (dice < 8) cannot appear.
        assert_eq!(deep[0], 0);
        assert!(shallow[0] > 0);
    }
}
