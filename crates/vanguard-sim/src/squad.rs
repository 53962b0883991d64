//! Squad operations: layout regeneration, custom-slot edits, and the
//! spawn pipeline.
//!
//! Free functions over the world, invoked by the engine (configuration
//! commands) and the activation system (trigger fire). A squad's layout
//! lives in two arrays: relative offsets in the squad's local frame and
//! absolute positions in world space; the layout system keeps the second
//! derived from the first every tick.

use glam::DVec2;
use hecs::World;

use vanguard_core::components::*;
use vanguard_core::constants::{CUSTOM_GROWTH_SPACING, CUSTOM_SEED_SPACING};
use vanguard_core::enums::{DistributionStrategy, FormationShape, SpawnRefusal, UnitArchetype};
use vanguard_core::events::SquadEvent;
use vanguard_core::types::Position;

use vanguard_formation::{generator, linker};

use crate::world_setup;

/// Rotate a local offset by a squad yaw (bearing radians, 0 = North,
/// clockwise).
pub fn rotate_offset(offset: DVec2, yaw: f64) -> DVec2 {
    DVec2::new(
        offset.x * yaw.cos() + offset.y * yaw.sin(),
        offset.y * yaw.cos() - offset.x * yaw.sin(),
    )
}

/// Regenerate a squad's position arrays from its shape and parameters.
///
/// Floors the stored object count to 1 first. Custom shapes reconcile the
/// existing hand-placed positions instead of regenerating (least
/// disruption); every other shape is rebuilt through the generator.
pub fn set_positions(world: &mut World, squad: hecs::Entity) {
    let Ok((config, layout, position, orientation)) = world.query_one_mut::<(
        &mut SquadConfig,
        &mut FormationLayout,
        &Position,
        &Orientation,
    )>(squad) else {
        return;
    };

    if config.params.num_objects < 1 {
        config.params.num_objects = 1;
    }

    if config.shape == FormationShape::Custom {
        reconcile_custom(layout, config.params.num_objects as usize, position);
    } else {
        layout.relative_offsets = generator::generate(
            config.shape,
            config.params.num_objects,
            config.params.spawn_distance,
            config.params.geometry_faces,
            config.params.wedge_angle_degrees,
        );
        layout.absolute_positions = layout
            .relative_offsets
            .iter()
            .map(|&offset| {
                let rotated = rotate_offset(offset, orientation.yaw);
                Position::new(position.x + rotated.x, position.y + rotated.y, position.z)
            })
            .collect();
    }
}

/// Reconcile custom positions against a changed object count.
///
/// No positions yet: seed a straight lateral line from the squad. Fewer
/// than requested: append slots one unit forward of the previous,
/// preserving all prior entries. More: truncate from the end. The relative
/// offsets are re-derived from the absolute positions afterward
/// (translation only; custom offsets live in the squad's ground plane).
fn reconcile_custom(layout: &mut FormationLayout, count: usize, position: &Position) {
    if layout.absolute_positions.is_empty() {
        layout.absolute_positions = (0..count)
            .map(|i| {
                Position::new(
                    position.x + i as f64 * CUSTOM_SEED_SPACING,
                    position.y,
                    position.z,
                )
            })
            .collect();
    } else if layout.absolute_positions.len() < count {
        while layout.absolute_positions.len() < count {
            let Some(&prev) = layout.absolute_positions.last() else {
                break;
            };
            layout
                .absolute_positions
                .push(Position::new(prev.x, prev.y + CUSTOM_GROWTH_SPACING, prev.z));
        }
    } else if layout.absolute_positions.len() > count {
        layout.absolute_positions.truncate(count);
    }

    layout.relative_offsets = layout
        .absolute_positions
        .iter()
        .map(|p| DVec2::new(p.x - position.x, p.y - position.y))
        .collect();
}

/// Directly edit one slot of a Custom-shape squad. Updates both arrays so
/// they stay consistent: the relative offset is the world position minus
/// the squad translation.
pub fn set_custom_position(world: &mut World, squad: hecs::Entity, slot: usize, target: Position) {
    let Ok((config, layout, position)) =
        world.query_one_mut::<(&SquadConfig, &mut FormationLayout, &Position)>(squad)
    else {
        return;
    };

    if config.shape != FormationShape::Custom || slot >= layout.absolute_positions.len() {
        log::warn!(
            "ignoring custom position edit for squad {} slot {}",
            config.id,
            slot
        );
        return;
    }

    layout.absolute_positions[slot] = target;
    layout.relative_offsets[slot] = DVec2::new(target.x - position.x, target.y - position.y);
}

/// Spawn a squad's units: instantiate per the distribution strategy, link
/// the formation graph, mark the leader, assign formation orders by
/// walking predecessor chains, and run the AI hook on every unit.
///
/// Refused entirely (no partial spawn) when a required archetype reference
/// is missing. Re-firing replaces any units from a previous spawn.
pub fn spawn_units(world: &mut World, squad: hecs::Entity, events: &mut Vec<SquadEvent>) {
    let (squad_id, shape, faces, distribution, positions, yaw) = {
        let Ok((config, layout, orientation)) =
            world.query_one_mut::<(&SquadConfig, &FormationLayout, &Orientation)>(squad)
        else {
            return;
        };
        (
            config.id,
            config.shape,
            config.params.geometry_faces,
            config.distribution.clone(),
            layout.absolute_positions.clone(),
            orientation.yaw,
        )
    };

    let archetypes = match resolve_archetypes(&distribution, positions.len()) {
        Ok(archetypes) => archetypes,
        Err(reason) => {
            log::warn!(
                "squad {squad_id} is missing a required archetype reference, spawn skipped"
            );
            events.push(SquadEvent::SpawnRefused { squad_id, reason });
            return;
        }
    };

    // Replace any units from a previous firing of this squad.
    despawn_units(world, squad);

    // Instantiate in slot order.
    let mut units = Vec::with_capacity(positions.len());
    for (slot, (&archetype, &position)) in archetypes.iter().zip(positions.iter()).enumerate() {
        units.push(world_setup::instantiate(
            world, archetype, position, yaw, squad_id, slot,
        ));
    }

    // Wire the formation graph through weak entity handles.
    let links = linker::link(shape, faces, &positions);
    for (slot, link) in links.iter().enumerate() {
        if let Ok(member) = world.query_one_mut::<&mut FormationMember>(units[slot]) {
            member.prev_in_formation = link.prev.map(|i| units[i]);
            member.next_in_formation = link.next.iter().map(|&i| units[i]).collect();
            member.formation_spacing = link.spacing;
        }
    }

    // Leader first, then orders from the actual predecessor walk.
    if let Some(&leader) = units.first() {
        if let Ok(member) = world.query_one_mut::<&mut FormationMember>(leader) {
            member.is_leader = true;
        }
    }
    for &unit in &units {
        let order = walk_to_leader(world, unit, units.len());
        if let Ok(member) = world.query_one_mut::<&mut FormationMember>(unit) {
            member.formation_order = order;
        }
    }

    // Final step — safe to initialize the AI.
    for &unit in &units {
        world_setup::initialize_ai(world, unit);
    }

    let unit_count = units.len();
    if let Ok(spawned) = world.query_one_mut::<&mut SpawnedUnits>(squad) {
        spawned.units = units;
    }

    events.push(SquadEvent::SquadSpawned {
        squad_id,
        unit_count,
    });
}

/// Despawn every unit a squad has spawned and clear its list.
pub fn despawn_units(world: &mut World, squad: hecs::Entity) {
    let old = match world.query_one_mut::<&mut SpawnedUnits>(squad) {
        Ok(spawned) => std::mem::take(&mut spawned.units),
        Err(_) => return,
    };
    for unit in old {
        let _ = world.despawn(unit);
    }
}

/// Resolve the archetype for every slot, or the refusal reason if a
/// required reference is missing.
fn resolve_archetypes(
    distribution: &DistributionStrategy,
    count: usize,
) -> Result<Vec<UnitArchetype>, SpawnRefusal> {
    match distribution {
        DistributionStrategy::Default { prefab } => {
            let default = prefab.ok_or(SpawnRefusal::MissingDefaultPrefab)?;
            Ok(vec![default; count])
        }
        DistributionStrategy::AlternateLeader { prefab, leader } => {
            let default = prefab.ok_or(SpawnRefusal::MissingDefaultPrefab)?;
            let leader = leader.ok_or(SpawnRefusal::MissingLeaderPrefab)?;
            Ok((0..count)
                .map(|slot| if slot == 0 { leader } else { default })
                .collect())
        }
        DistributionStrategy::Custom { prefab, overrides } => {
            // The override list may be shorter than the slot count, so the
            // default is required even when overrides exist.
            let default = prefab.ok_or(SpawnRefusal::MissingDefaultPrefab)?;
            Ok((0..count)
                .map(|slot| overrides.get(slot).copied().flatten().unwrap_or(default))
                .collect())
        }
    }
}

/// Hop count from a unit to its formation leader, bounded by the unit
/// count so a malformed graph cannot loop forever.
fn walk_to_leader(world: &World, unit: hecs::Entity, bound: usize) -> u32 {
    let mut order = 0u32;
    let mut cursor = unit;

    loop {
        let prev = {
            let Ok(member) = world.get::<&FormationMember>(cursor) else {
                break;
            };
            if member.is_leader {
                break;
            }
            member.prev_in_formation
        };

        match prev {
            Some(prev) => {
                order += 1;
                cursor = prev;
                if order as usize > bound {
                    break;
                }
            }
            None => break,
        }
    }

    order
}
