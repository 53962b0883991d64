//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::SpawnRefusal;

/// Squad-system events, buffered during the tick and drained into the
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SquadEvent {
    /// A trigger was appended.
    TriggerAdded { trigger_id: u32 },
    /// A trigger and its squads were removed.
    TriggerRemoved { trigger_id: u32 },
    /// A squad was added to a trigger's roster.
    SquadAdded { squad_id: u32, trigger_id: u32 },
    /// A squad was removed.
    SquadRemoved { squad_id: u32 },
    /// The probe entered a trigger's volume.
    TriggerEntered { trigger_id: u32 },
    /// A squad spawned its units.
    SquadSpawned { squad_id: u32, unit_count: usize },
    /// A squad's spawn was skipped because a required archetype reference
    /// is missing. Non-fatal; the tick continues.
    SpawnRefused {
        squad_id: u32,
        reason: SpawnRefusal,
    },
    /// A run began (probe spawned).
    RunStarted,
    /// A run ended, by command or by the probe passing the last trigger.
    RunEnded,
}
