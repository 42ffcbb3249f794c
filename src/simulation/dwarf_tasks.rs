//! Dwarf task resolution
//!
//! Each dwarf is resolved once per tick by a pure transition function:
//! `(dwarf, context) -> (next dwarf, effects)`. The dwarf value carries the
//! new task and position; effects describe what the dwarf did to the rest of
//! the world and are applied before the next dwarf is resolved, so later
//! dwarves see earlier dwarves' work within the same tick.
//!
//! Priority, highest first:
//! 1. A hostile in range interrupts any task except fighting
//! 2. The current task's own rule
//! 3. An idle dwarf picks up the nearest mining designation

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, Position};
use crate::entity::dwarf::Dwarf;
use crate::entity::item::Item;
use crate::entity::monster::Monster;
use crate::entity::tasks::DwarfTask;
use crate::simulation::job_finder::{nearest_designated_tile, nearest_hostile};
use crate::world::messages::MessageKind;
use crate::world::state::GameState;
use crate::world::terrain::TerrainType;
use crate::world::tile::TileGrid;

/// Read-only view of the world a dwarf decides against
pub struct TaskContext<'a> {
    pub tiles: &'a TileGrid,
    pub monsters: &'a [Monster],
    pub items: &'a [Item],
    pub config: &'a SimulationConfig,
}

impl<'a> TaskContext<'a> {
    pub fn new(state: &'a GameState, config: &'a SimulationConfig) -> Self {
        Self {
            tiles: &state.tiles,
            monsters: &state.monsters,
            items: &state.items,
            config,
        }
    }

    fn monster(&self, id: EntityId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    fn item(&self, id: EntityId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}

/// A change a dwarf makes to something other than itself
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEffect {
    /// Deal damage to a monster
    Strike { monster: EntityId, damage: i32 },
    /// Dig or chop a designated tile, crediting the material
    Excavate { at: Position },
    /// Move a carried item along with its hauler
    CarryItem { item: EntityId, to: Position },
    /// Drop an item onto a stockpile tile
    StoreItem { item: EntityId, at: Position },
    /// Remove an item from the world into a dwarf's equipment
    TakeItem { item: EntityId },
    Log { kind: MessageKind, text: String },
}

/// Outcome of resolving one dwarf for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct DwarfStep {
    pub dwarf: Dwarf,
    pub effects: Vec<TaskEffect>,
}

impl DwarfStep {
    fn stay(dwarf: &Dwarf) -> Self {
        Self {
            dwarf: dwarf.clone(),
            effects: Vec::new(),
        }
    }

    fn switch(dwarf: &Dwarf, task: DwarfTask) -> Self {
        Self {
            dwarf: dwarf.with_task(task),
            effects: Vec::new(),
        }
    }

    fn idle(dwarf: &Dwarf) -> Self {
        Self::switch(dwarf, DwarfTask::Idle)
    }

    fn walk(dwarf: &Dwarf, toward: Position) -> Self {
        Self {
            dwarf: dwarf.moved_to(dwarf.position.step_toward(&toward)),
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: TaskEffect) -> Self {
        self.effects.push(effect);
        self
    }

    fn log(self, kind: MessageKind, text: String) -> Self {
        self.with(TaskEffect::Log { kind, text })
    }
}

/// Decide what `dwarf` does this tick
pub fn resolve_dwarf(dwarf: &Dwarf, ctx: &TaskContext) -> DwarfStep {
    if !dwarf.task.is_fighting() {
        if let Some(hostile) = nearest_hostile(
            ctx.monsters,
            dwarf.position,
            ctx.config.hostile_detection_radius,
        ) {
            return DwarfStep::switch(dwarf, DwarfTask::Fighting { monster: hostile.id });
        }
    }

    match dwarf.task {
        DwarfTask::Fighting { monster } => fight(dwarf, monster, ctx),
        DwarfTask::Crafting { workshop, .. } => {
            if dwarf.position == workshop {
                DwarfStep::stay(dwarf)
            } else {
                DwarfStep::walk(dwarf, workshop)
            }
        }
        DwarfTask::Hauling {
            item,
            stockpile,
            carrying,
        } => haul(dwarf, item, stockpile, carrying, ctx),
        DwarfTask::Equipping { item } => equip(dwarf, item, ctx),
        DwarfTask::Idle => match nearest_designated_tile(ctx.tiles, dwarf.position) {
            Some(tile) => DwarfStep::switch(
                dwarf,
                DwarfTask::Mining {
                    target: tile.position,
                },
            ),
            None => DwarfStep::stay(dwarf),
        },
        DwarfTask::Mining { target } => mine(dwarf, target, ctx),
        DwarfTask::Building => DwarfStep::stay(dwarf),
    }
}

fn fight(dwarf: &Dwarf, monster: EntityId, ctx: &TaskContext) -> DwarfStep {
    let Some(target) = ctx.monster(monster).filter(|m| m.is_alive()) else {
        return DwarfStep::idle(dwarf);
    };

    if !dwarf.position.is_adjacent(&target.position) {
        return DwarfStep::walk(dwarf, target.position);
    }

    let damage = dwarf.attack_damage(ctx.config.unarmed_damage, ctx.config.sword_damage);
    let strike = TaskEffect::Strike { monster, damage };
    if target.health - damage <= 0 {
        DwarfStep::idle(dwarf).with(strike).log(
            MessageKind::Success,
            format!("{} defeated a {}!", dwarf.name, target.monster_type),
        )
    } else {
        DwarfStep::stay(dwarf).with(strike)
    }
}

fn haul(
    dwarf: &Dwarf,
    item_id: EntityId,
    stockpile: Position,
    carrying: bool,
    ctx: &TaskContext,
) -> DwarfStep {
    let Some(item) = ctx.item(item_id) else {
        return DwarfStep::idle(dwarf);
    };

    if !carrying {
        if dwarf.position == item.location {
            return DwarfStep::switch(
                dwarf,
                DwarfTask::Hauling {
                    item: item_id,
                    stockpile,
                    carrying: true,
                },
            );
        }
        return DwarfStep::walk(dwarf, item.location);
    }

    if dwarf.position == stockpile {
        return DwarfStep::idle(dwarf)
            .with(TaskEffect::StoreItem {
                item: item_id,
                at: dwarf.position,
            })
            .log(
                MessageKind::Info,
                format!("{} hauled {} to stockpile.", dwarf.name, item.item_type),
            );
    }

    let step = DwarfStep::walk(dwarf, stockpile);
    let to = step.dwarf.position;
    step.with(TaskEffect::CarryItem { item: item_id, to })
}

fn equip(dwarf: &Dwarf, item_id: EntityId, ctx: &TaskContext) -> DwarfStep {
    let Some(item) = ctx.item(item_id) else {
        return DwarfStep::idle(dwarf);
    };

    if dwarf.position != item.location {
        return DwarfStep::walk(dwarf, item.location);
    }

    let Some(slot) = item.item_type.equipment_slot() else {
        return DwarfStep::idle(dwarf);
    };

    let mut step = DwarfStep::idle(dwarf);
    step.dwarf.equipment.set(slot, item.item_type);
    step.with(TaskEffect::TakeItem { item: item_id }).log(
        MessageKind::Success,
        format!("{} equipped {}.", dwarf.name, item.item_type),
    )
}

fn mine(dwarf: &Dwarf, target: Position, ctx: &TaskContext) -> DwarfStep {
    if dwarf.position != target {
        return DwarfStep::walk(dwarf, target);
    }

    let step = DwarfStep::idle(dwarf);
    let Some(tile) = ctx.tiles.at(target).filter(|t| t.mining_designated) else {
        return step;
    };

    let step = step.with(TaskEffect::Excavate { at: target });
    match tile.terrain {
        TerrainType::Stone => step.log(MessageKind::Info, format!("{} mined stone.", dwarf.name)),
        TerrainType::Tree => step.log(
            MessageKind::Info,
            format!("{} chopped down a tree.", dwarf.name),
        ),
        _ => step,
    }
}

/// Apply one dwarf's effects to the world
pub fn apply_effects(state: &mut GameState, effects: Vec<TaskEffect>) {
    for effect in effects {
        match effect {
            TaskEffect::Strike { monster, damage } => {
                if let Some(m) = state.monsters.iter_mut().find(|m| m.id == monster) {
                    m.health -= damage;
                }
            }
            TaskEffect::Excavate { at } => excavate(state, at),
            TaskEffect::CarryItem { item, to } => {
                if let Some(i) = state.items.iter_mut().find(|i| i.id == item) {
                    i.location = to;
                }
            }
            TaskEffect::StoreItem { item, at } => {
                if let Some(i) = state.items.iter_mut().find(|i| i.id == item) {
                    i.location = at;
                }
                if let Some(tile) = state.tile_mut(at) {
                    if !tile.stored_items.contains(&item) {
                        tile.stored_items.push(item);
                    }
                }
            }
            TaskEffect::TakeItem { item } => {
                let Some(idx) = state.items.iter().position(|i| i.id == item) else {
                    continue;
                };
                let taken = state.items.remove(idx);
                if let Some(tile) = state.tile_mut(taken.location) {
                    tile.stored_items.retain(|id| *id != item);
                }
            }
            TaskEffect::Log { kind, text } => state.log(kind, text),
        }
    }
}

fn excavate(state: &mut GameState, at: Position) {
    let Some(tile) = state.tiles.at_mut(at) else {
        return;
    };
    if !tile.mining_designated {
        return;
    }
    tile.mining_designated = false;

    match tile.terrain {
        TerrainType::Stone => {
            tile.terrain = TerrainType::Empty;
            state.resources.stone += 1;
        }
        TerrainType::Tree => {
            tile.terrain = TerrainType::Grass;
            state.resources.wood += 1;
        }
        _ => {}
    }
}

/// Drop the fallen, then resolve every dwarf in roster order
pub fn step_dwarves(state: &mut GameState, cfg: &SimulationConfig) {
    state.dwarves.retain(Dwarf::is_alive);

    for i in 0..state.dwarves.len() {
        let step = {
            let ctx = TaskContext::new(state, cfg);
            resolve_dwarf(&state.dwarves[i], &ctx)
        };

        if step.dwarf.task.kind() != state.dwarves[i].task.kind() {
            tracing::trace!(
                "{} {} -> {}",
                step.dwarf.name,
                state.dwarves[i].task.kind(),
                step.dwarf.task.kind()
            );
        }

        state.dwarves[i] = step.dwarf;
        apply_effects(state, step.effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::item::{EquipmentSlot, ItemType};
    use crate::entity::monster::MonsterType;
    use crate::world::generation::create_game_state_with;
    use crate::world::terrain::ConstructionType;

    fn id(n: u128) -> EntityId {
        EntityId(uuid::Uuid::from_u128(n))
    }

    /// Seeded world with a single dwarf standing at (10, 8)
    fn lone_dwarf() -> (GameState, SimulationConfig) {
        let cfg = SimulationConfig::default();
        let mut state = create_game_state_with(21, &cfg);
        state.dwarves.truncate(1);
        state.dwarves[0].position = Position::new(10, 8);
        (state, cfg)
    }

    fn resolve(state: &GameState, cfg: &SimulationConfig) -> DwarfStep {
        resolve_dwarf(&state.dwarves[0], &TaskContext::new(state, cfg))
    }

    #[test]
    fn test_hostile_interrupts_any_task() {
        let (mut state, cfg) = lone_dwarf();
        state.dwarves[0].task = DwarfTask::Hauling {
            item: id(1),
            stockpile: Position::new(2, 2),
            carrying: true,
        };
        state
            .monsters
            .push(Monster::new(id(9), MonsterType::Goblin, Position::new(14, 10)));

        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf.task, DwarfTask::Fighting { monster: id(9) });
        assert_eq!(step.dwarf.position, Position::new(10, 8));
        assert!(step.effects.is_empty());
    }

    #[test]
    fn test_hostile_at_radius_is_ignored() {
        let (mut state, cfg) = lone_dwarf();
        state
            .monsters
            .push(Monster::new(id(9), MonsterType::Goblin, Position::new(18, 8)));

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
    }

    #[test]
    fn test_fighter_walks_then_strikes() {
        let (mut state, cfg) = lone_dwarf();
        state
            .monsters
            .push(Monster::new(id(9), MonsterType::Troll, Position::new(13, 8)));
        state.dwarves[0].task = DwarfTask::Fighting { monster: id(9) };

        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf.position, Position::new(11, 8));

        state.dwarves[0].position = Position::new(12, 8);
        let step = resolve(&state, &cfg);
        assert_eq!(
            step.effects,
            vec![TaskEffect::Strike {
                monster: id(9),
                damage: 10
            }]
        );
        assert!(step.dwarf.task.is_fighting());
    }

    #[test]
    fn test_killing_blow_logs_and_idles() {
        let (mut state, cfg) = lone_dwarf();
        let mut goblin = Monster::new(id(9), MonsterType::Goblin, Position::new(10, 9));
        goblin.health = 15;
        state.monsters.push(goblin);
        state.dwarves[0].task = DwarfTask::Fighting { monster: id(9) };
        state.dwarves[0].equipment.set(EquipmentSlot::Weapon, ItemType::Sword);

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
        assert_eq!(step.effects.len(), 2);
        assert_eq!(
            step.effects[0],
            TaskEffect::Strike {
                monster: id(9),
                damage: 20
            }
        );

        apply_effects(&mut state, step.effects);
        assert!(!state.monsters[0].is_alive());
        let msg = state.messages.newest().unwrap();
        assert_eq!(msg.kind, MessageKind::Success);
        assert_eq!(msg.text, format!("{} defeated a goblin!", state.dwarves[0].name));
    }

    #[test]
    fn test_fighter_with_missing_target_goes_idle() {
        let (mut state, cfg) = lone_dwarf();
        state.dwarves[0].task = DwarfTask::Fighting { monster: id(9) };
        assert!(resolve(&state, &cfg).dwarf.task.is_idle());
    }

    #[test]
    fn test_crafter_walks_to_workshop_then_waits() {
        let (mut state, cfg) = lone_dwarf();
        let workshop = Position::new(10, 10);
        state.dwarves[0].task = DwarfTask::Crafting {
            workshop,
            item_type: ItemType::Pickaxe,
        };

        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf.position, Position::new(10, 9));

        state.dwarves[0].position = workshop;
        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf, state.dwarves[0]);
    }

    #[test]
    fn test_idle_selects_designation_without_moving() {
        let (mut state, cfg) = lone_dwarf();
        let target = Position::new(12, 14);
        state.tile_mut(target).unwrap().mining_designated = true;

        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf.task, DwarfTask::Mining { target });
        assert_eq!(step.dwarf.position, Position::new(10, 8));
    }

    #[test]
    fn test_mining_stone_on_arrival() {
        let (mut state, cfg) = lone_dwarf();
        let target = Position::new(10, 8);
        let tile = state.tile_mut(target).unwrap();
        tile.terrain = TerrainType::Stone;
        tile.mining_designated = true;
        state.dwarves[0].task = DwarfTask::Mining { target };

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
        apply_effects(&mut state, step.effects);

        let tile = state.tile(target).unwrap();
        assert_eq!(tile.terrain, TerrainType::Empty);
        assert!(!tile.mining_designated);
        assert_eq!(state.resources.stone, 1);
        assert_eq!(
            state.messages.newest().unwrap().text,
            format!("{} mined stone.", state.dwarves[0].name)
        );
    }

    #[test]
    fn test_chopping_tree_yields_wood() {
        let (mut state, cfg) = lone_dwarf();
        let target = Position::new(10, 8);
        let tile = state.tile_mut(target).unwrap();
        tile.terrain = TerrainType::Tree;
        tile.mining_designated = true;
        state.dwarves[0].task = DwarfTask::Mining { target };

        let step = resolve(&state, &cfg);
        apply_effects(&mut state, step.effects);
        assert_eq!(state.tile(target).unwrap().terrain, TerrainType::Grass);
        assert_eq!(state.resources.wood, 1);
        assert_eq!(state.resources.stone, 0);
    }

    #[test]
    fn test_mining_undesignated_tile_is_noop() {
        let (mut state, cfg) = lone_dwarf();
        let target = Position::new(10, 8);
        state.tile_mut(target).unwrap().terrain = TerrainType::Stone;
        state.dwarves[0].task = DwarfTask::Mining { target };

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
        assert!(step.effects.is_empty());
    }

    #[test]
    fn test_haul_pickup_carry_and_store() {
        let (mut state, cfg) = lone_dwarf();
        let stockpile = Position::new(10, 6);
        state.tile_mut(stockpile).unwrap().construction = Some(ConstructionType::Stockpile);
        state
            .items
            .push(Item::new(id(1), ItemType::Sword, Position::new(10, 8)));
        state.dwarves[0].task = DwarfTask::Hauling {
            item: id(1),
            stockpile,
            carrying: false,
        };

        // Pick up without moving
        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf.task.carried_item(), Some(id(1)));
        assert_eq!(step.dwarf.position, Position::new(10, 8));
        state.dwarves[0] = step.dwarf;

        // Item travels with the dwarf
        let step = resolve(&state, &cfg);
        assert_eq!(
            step.effects,
            vec![TaskEffect::CarryItem {
                item: id(1),
                to: Position::new(10, 7)
            }]
        );
        state.dwarves[0] = step.dwarf;
        apply_effects(&mut state, step.effects);
        assert_eq!(state.items[0].location, Position::new(10, 7));

        let step = resolve(&state, &cfg);
        state.dwarves[0] = step.dwarf;
        apply_effects(&mut state, step.effects);

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
        state.dwarves[0] = step.dwarf;
        apply_effects(&mut state, step.effects);

        assert_eq!(state.items[0].location, stockpile);
        assert_eq!(state.tile(stockpile).unwrap().stored_items, vec![id(1)]);
        assert_eq!(state.messages.newest().unwrap().kind, MessageKind::Info);
    }

    #[test]
    fn test_haul_of_vanished_item_goes_idle() {
        let (mut state, cfg) = lone_dwarf();
        state.dwarves[0].task = DwarfTask::Hauling {
            item: id(1),
            stockpile: Position::new(1, 1),
            carrying: true,
        };
        assert!(resolve(&state, &cfg).dwarf.task.is_idle());
    }

    #[test]
    fn test_store_is_recorded_once() {
        let (mut state, _) = lone_dwarf();
        let at = Position::new(4, 8);
        state.items.push(Item::new(id(1), ItemType::Armor, at));
        let store = TaskEffect::StoreItem { item: id(1), at };

        apply_effects(&mut state, vec![store.clone(), store]);
        assert_eq!(state.tile(at).unwrap().stored_items, vec![id(1)]);
    }

    #[test]
    fn test_equip_armor() {
        let (mut state, cfg) = lone_dwarf();
        let at = Position::new(10, 8);
        state.items.push(Item::new(id(1), ItemType::Armor, at));
        state.tile_mut(at).unwrap().stored_items.push(id(1));
        state.dwarves[0].task = DwarfTask::Equipping { item: id(1) };

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
        assert!(step.dwarf.equipment.is_armored());
        state.dwarves[0] = step.dwarf;
        apply_effects(&mut state, step.effects);

        assert!(state.items.is_empty());
        assert!(state.tile(at).unwrap().stored_items.is_empty());
        assert_eq!(
            state.messages.newest().unwrap().text,
            format!("{} equipped armor.", state.dwarves[0].name)
        );
    }

    #[test]
    fn test_pickaxe_fills_weapon_slot() {
        let (mut state, cfg) = lone_dwarf();
        state
            .items
            .push(Item::new(id(1), ItemType::Pickaxe, Position::new(10, 8)));
        state.dwarves[0].task = DwarfTask::Equipping { item: id(1) };

        let step = resolve(&state, &cfg);
        assert_eq!(step.dwarf.equipment.weapon, Some(ItemType::Pickaxe));
        assert!(!step.dwarf.equipment.has_sword());
    }

    #[test]
    fn test_furniture_cannot_be_equipped() {
        let (mut state, cfg) = lone_dwarf();
        state
            .items
            .push(Item::new(id(1), ItemType::Furniture, Position::new(10, 8)));
        state.dwarves[0].task = DwarfTask::Equipping { item: id(1) };

        let step = resolve(&state, &cfg);
        assert!(step.dwarf.task.is_idle());
        assert!(step.effects.is_empty());
        assert_eq!(step.dwarf.equipment, state.dwarves[0].equipment);
    }

    #[test]
    fn test_step_dwarves_drops_the_fallen() {
        let cfg = SimulationConfig::default();
        let mut state = create_game_state_with(21, &cfg);
        state.dwarves[1].health = 0;
        state.dwarves[3].health = -4;

        step_dwarves(&mut state, &cfg);
        assert_eq!(state.dwarves.len(), 3);
        assert!(state.dwarves.iter().all(Dwarf::is_alive));
    }

    #[test]
    fn test_two_miners_one_tile() {
        let cfg = SimulationConfig::default();
        let mut state = create_game_state_with(21, &cfg);
        state.dwarves.truncate(2);
        let target = Position::new(10, 20);
        state.tile_mut(target).unwrap().mining_designated = true;
        for d in &mut state.dwarves {
            d.position = target;
            d.task = DwarfTask::Mining { target };
        }

        step_dwarves(&mut state, &cfg);
        assert_eq!(state.resources.stone, 1);
        assert!(state.dwarves.iter().all(|d| d.task.is_idle()));
    }
}
