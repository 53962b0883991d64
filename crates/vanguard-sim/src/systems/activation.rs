//! Trigger activation system.
//!
//! Fires a trigger on the probe's entry edge: outside the volume last
//! tick, inside now. Exit re-arms the flag, so re-entry fires again — the
//! trigger performs no de-duplication. Firing spawns every squad in the
//! trigger's roster, in roster order, within the same tick.
//!
//! Detection and spawning are two phases over a snapshot of the roster
//! lists, so spawning never mutates a list mid-iteration.

use hecs::World;

use vanguard_core::components::{Probe, SquadRoster, TriggerVolume};
use vanguard_core::events::SquadEvent;
use vanguard_core::types::{Position, Size};

use crate::squad;

pub fn run(world: &mut World, triggers: &[hecs::Entity], events: &mut Vec<SquadEvent>) {
    let probe_position = match world
        .query::<(&Probe, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, position))| *position)
    {
        Some(position) => position,
        None => return,
    };

    // Phase 1: entry-edge detection per trigger, in manager order.
    let mut fired: Vec<(u32, Vec<hecs::Entity>)> = Vec::new();
    for &trigger in triggers {
        let Ok((volume, position, roster)) =
            world.query_one_mut::<(&mut TriggerVolume, &Position, &SquadRoster)>(trigger)
        else {
            continue;
        };

        let inside = contains(position, &volume.size, &probe_position);
        if inside && !volume.probe_inside {
            fired.push((volume.id, roster.squads.clone()));
        }
        volume.probe_inside = inside;
    }

    // Phase 2: spawn every squad of every fired trigger.
    for (trigger_id, squads) in fired {
        log::info!("probe entered trigger {trigger_id}");
        events.push(SquadEvent::TriggerEntered { trigger_id });

        for entity in squads {
            squad::spawn_units(world, entity, events);
        }
    }
}

/// Axis-aligned containment against a volume centered on `center`.
fn contains(center: &Position, size: &Size, point: &Position) -> bool {
    (point.x - center.x).abs() <= size.x / 2.0
        && (point.y - center.y).abs() <= size.y / 2.0
        && (point.z - center.z).abs() <= size.z / 2.0
}
