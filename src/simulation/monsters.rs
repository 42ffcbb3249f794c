//! Monster spawning and AI
//!
//! Monsters arrive on a random map edge, chase the nearest living dwarf one
//! cell per tick and strike once adjacent.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, Position};
use crate::entity::monster::{Monster, MonsterType};
use crate::simulation::job_finder::nearest_living_dwarf;
use crate::world::messages::MessageKind;
use crate::world::state::GameState;

/// Roll for a new monster on spawn ticks, returns its id if one appeared
pub fn try_spawn_monster<R: Rng + ?Sized>(
    state: &mut GameState,
    cfg: &SimulationConfig,
    rng: &mut R,
) -> Option<EntityId> {
    if cfg.monster_spawn_interval == 0 || state.tick % cfg.monster_spawn_interval != 0 {
        return None;
    }
    if rng.gen::<f64>() >= cfg.monster_spawn_chance {
        return None;
    }

    let position = random_edge_position(state.tiles.width, state.tiles.height, rng);
    let monster_type = MonsterType::ALL[rng.gen_range(0..MonsterType::ALL.len())];
    let monster = Monster::new(EntityId::from_rng(rng), monster_type, position);
    let id = monster.id;

    state.monsters.push(monster);
    state.log(
        MessageKind::Warning,
        format!("A {} has appeared at the edge of the map!", monster_type),
    );
    Some(id)
}

fn random_edge_position<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Position {
    let (w, h) = (width as i32, height as i32);
    match rng.gen_range(0..4) {
        0 => Position::new(rng.gen_range(0..w), 0),
        1 => Position::new(w - 1, rng.gen_range(0..h)),
        2 => Position::new(rng.gen_range(0..w), h - 1),
        _ => Position::new(0, rng.gen_range(0..h)),
    }
}

/// Drop slain monsters, then move or attack with each survivor
pub fn step_monsters(state: &mut GameState) {
    state.monsters.retain(Monster::is_alive);

    for mi in 0..state.monsters.len() {
        let from = state.monsters[mi].position;
        // No one left to chase; keep the old target and stay put
        let Some(di) = nearest_living_dwarf(&state.dwarves, from) else {
            continue;
        };

        let monster = &mut state.monsters[mi];
        let dwarf = &mut state.dwarves[di];
        monster.target_dwarf = Some(dwarf.id);

        if !from.is_adjacent(&dwarf.position) {
            monster.position = from.step_toward(&dwarf.position);
            continue;
        }

        let damage = monster
            .monster_type
            .damage_against(dwarf.equipment.is_armored());
        dwarf.health -= damage;
        if !dwarf.is_alive() {
            let text = format!("{} has fallen in combat!", dwarf.name);
            tracing::debug!("{} killed by {}", dwarf.name, monster.monster_type);
            state.log(MessageKind::Error, text);
        }
    }
}
