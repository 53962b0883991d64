//! Manager constraint passes — a tiny constraint solver re-run every tick.
//!
//! Five independent, idempotent passes over the owned collections, always
//! in the same order. Running them continuously (rather than reactively on
//! edits) means any out-of-band mutation is corrected on the next tick.

use hecs::World;

use vanguard_core::components::{SquadRoster, TriggerVolume};
use vanguard_core::types::{Position, Size};

use crate::manager::ManagerState;

/// Run all five passes in order.
pub fn run(world: &mut World, manager: &mut ManagerState, triggers: &[hecs::Entity]) {
    reset_manager_scale(manager);
    floor_trigger_travel(world, manager, triggers);
    align_triggers(world, manager, triggers);
    match_trigger_size(world, manager, triggers);
    clamp_squads_to_triggers(world, triggers);
}

/// Pass 1: the manager's scale is always unit scale.
pub fn reset_manager_scale(manager: &mut ManagerState) {
    if manager.scale != Size::unit() {
        manager.scale = Size::unit();
    }
}

/// Pass 2: no trigger may sit closer to the manager than half the
/// spawn-area depth on the travel axis.
pub fn floor_trigger_travel(
    world: &mut World,
    manager: &ManagerState,
    triggers: &[hecs::Entity],
) {
    let floor = manager.position.y + manager.spawn_area.y / 2.0;

    for &trigger in triggers {
        if let Ok(position) = world.query_one_mut::<&mut Position>(trigger) {
            if position.y < floor {
                position.y = floor;
            }
        }
    }
}

/// Pass 3: when alignment is enabled, triggers share the manager's
/// lateral and vertical position.
pub fn align_triggers(world: &mut World, manager: &ManagerState, triggers: &[hecs::Entity]) {
    if !manager.align_triggers {
        return;
    }

    for &trigger in triggers {
        if let Ok(position) = world.query_one_mut::<&mut Position>(trigger) {
            position.x = manager.position.x;
            position.z = manager.position.z;
        }
    }
}

/// Pass 4: every trigger's volume matches the spawn-area size.
pub fn match_trigger_size(world: &mut World, manager: &ManagerState, triggers: &[hecs::Entity]) {
    for &trigger in triggers {
        if let Ok(volume) = world.query_one_mut::<&mut TriggerVolume>(trigger) {
            if volume.size != manager.spawn_area {
                volume.size = manager.spawn_area;
            }
        }
    }
}

/// Pass 5: every squad stays within its owning trigger's volume bounds,
/// clamped on each axis independently.
pub fn clamp_squads_to_triggers(world: &mut World, triggers: &[hecs::Entity]) {
    for &trigger in triggers {
        let (center, size, squads) = {
            let Ok(query) = world
                .query_one_mut::<(&Position, &TriggerVolume, &SquadRoster)>(trigger)
            else {
                continue;
            };
            let (position, volume, roster) = query;
            (*position, volume.size, roster.squads.clone())
        };

        for squad in squads {
            if let Ok(position) = world.query_one_mut::<&mut Position>(squad) {
                position.x = position
                    .x
                    .clamp(center.x - size.x / 2.0, center.x + size.x / 2.0);
                position.y = position
                    .y
                    .clamp(center.y - size.y / 2.0, center.y + size.y / 2.0);
                position.z = position
                    .z
                    .clamp(center.z - size.z / 2.0, center.z + size.z / 2.0);
            }
        }
    }
}
