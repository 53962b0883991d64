//! Entity spawn factories for the squad-system world.
//!
//! Creates trigger, squad, unit, and probe entities with appropriate
//! component bundles. `instantiate` and `initialize_ai` are the two
//! external contracts of the spawn pipeline: instantiation returns a live
//! entity immediately, and the AI hook is fire-and-forget.

use hecs::World;

use vanguard_core::components::*;
use vanguard_core::constants::PROBE_SPEED;
use vanguard_core::enums::UnitArchetype;
use vanguard_core::types::{Position, Size, Velocity};

/// Spawn a trigger entity with an empty roster.
pub fn spawn_trigger(world: &mut World, id: u32, position: Position, size: Size) -> hecs::Entity {
    world.spawn((
        TriggerVolume {
            id,
            name: String::new(),
            size,
            probe_inside: false,
        },
        position,
        SquadRoster::default(),
    ))
}

/// Spawn a squad entity under the given trigger, with default formation
/// configuration and an empty layout. The caller regenerates positions
/// and inserts the squad into the trigger's roster.
pub fn spawn_squad(
    world: &mut World,
    id: u32,
    trigger: hecs::Entity,
    position: Position,
) -> hecs::Entity {
    world.spawn((
        SquadConfig {
            id,
            name: String::new(),
            shape: Default::default(),
            params: Default::default(),
            distribution: Default::default(),
        },
        FormationLayout::default(),
        position,
        Orientation::default(),
        OwnerTrigger { trigger },
        SpawnedUnits::default(),
    ))
}

/// Instantiate one unit of the given archetype at a formation slot.
/// Synchronous: the returned entity is live immediately. Missing archetype
/// references are checked by the caller before invocation, never here.
pub fn instantiate(
    world: &mut World,
    archetype: UnitArchetype,
    position: Position,
    yaw: f64,
    squad_id: u32,
    slot: usize,
) -> hecs::Entity {
    world.spawn((
        UnitBody { archetype, squad_id },
        position,
        Orientation { yaw },
        FormationMember {
            slot,
            formation_position: position,
            is_leader: false,
            formation_order: 0,
            formation_spacing: 0.0,
            prev_in_formation: None,
            next_in_formation: Vec::new(),
        },
    ))
}

/// External AI initialization hook. Invoked last in the spawn pipeline,
/// once per unit, after the formation graph is linked.
pub fn initialize_ai(world: &mut World, unit: hecs::Entity) {
    let _ = world.insert_one(unit, AiReady);
}

/// Spawn the probe (the triggering actor) heading north at constant speed.
pub fn spawn_probe(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((Probe, position, Velocity::new(0.0, PROBE_SPEED, 0.0)))
}
