//! Snapshot system: queries the ECS world and builds a complete
//! SquadSystemSnapshot.
//!
//! This system is read-only — it never modifies the world. View lists
//! follow the semantic manager/roster/slot order, not entity-id order.

use hecs::World;

use vanguard_core::components::*;
use vanguard_core::enums::GamePhase;
use vanguard_core::events::SquadEvent;
use vanguard_core::state::*;
use vanguard_core::types::{Position, SimTime};

use crate::manager::ManagerState;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    manager: &ManagerState,
    triggers: &[hecs::Entity],
    events: Vec<SquadEvent>,
) -> SquadSystemSnapshot {
    SquadSystemSnapshot {
        time: *time,
        phase,
        manager: ManagerView {
            position: manager.position,
            scale: manager.scale,
            spawn_area: manager.spawn_area,
            align_triggers: manager.align_triggers,
        },
        triggers: triggers
            .iter()
            .filter_map(|&trigger| build_trigger(world, trigger))
            .collect(),
        probe: build_probe(world),
        events,
    }
}

fn build_trigger(world: &World, entity: hecs::Entity) -> Option<TriggerView> {
    let volume = world.get::<&TriggerVolume>(entity).ok()?;
    let position = world.get::<&Position>(entity).ok()?;
    let roster = world.get::<&SquadRoster>(entity).ok()?;

    Some(TriggerView {
        id: volume.id,
        name: volume.name.clone(),
        position: *position,
        size: volume.size,
        probe_inside: volume.probe_inside,
        squads: roster
            .squads
            .iter()
            .filter_map(|&squad| build_squad(world, squad))
            .collect(),
    })
}

fn build_squad(world: &World, entity: hecs::Entity) -> Option<SquadView> {
    let config = world.get::<&SquadConfig>(entity).ok()?;
    let layout = world.get::<&FormationLayout>(entity).ok()?;
    let position = world.get::<&Position>(entity).ok()?;
    let orientation = world.get::<&Orientation>(entity).ok()?;
    let spawned = world.get::<&SpawnedUnits>(entity).ok()?;

    Some(SquadView {
        id: config.id,
        name: config.name.clone(),
        shape: config.shape,
        params: config.params,
        distribution: config.distribution.clone(),
        position: *position,
        yaw: orientation.yaw,
        relative_offsets: layout.relative_offsets.clone(),
        absolute_positions: layout.absolute_positions.clone(),
        units: spawned
            .units
            .iter()
            .filter_map(|&unit| build_unit(world, unit))
            .collect(),
    })
}

fn build_unit(world: &World, entity: hecs::Entity) -> Option<UnitView> {
    let body = world.get::<&UnitBody>(entity).ok()?;
    let member = world.get::<&FormationMember>(entity).ok()?;
    let position = world.get::<&Position>(entity).ok()?;

    // Graph links are weak entity handles; report them as slot indices.
    let slot_of = |link: hecs::Entity| -> Option<usize> {
        world
            .get::<&FormationMember>(link)
            .ok()
            .map(|member| member.slot)
    };

    Some(UnitView {
        slot: member.slot,
        archetype: body.archetype,
        position: *position,
        is_leader: member.is_leader,
        formation_order: member.formation_order,
        formation_spacing: member.formation_spacing,
        prev_slot: member.prev_in_formation.and_then(slot_of),
        next_slots: member
            .next_in_formation
            .iter()
            .filter_map(|&next| slot_of(next))
            .collect(),
        ai_ready: world.get::<&AiReady>(entity).is_ok(),
    })
}

fn build_probe(world: &World) -> Option<ProbeView> {
    world
        .query::<(&Probe, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, position))| ProbeView {
            position: *position,
        })
}
