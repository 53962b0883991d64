//! Commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so no
//! structural mutation ever happens while a system is iterating the
//! trigger or roster lists. Commands naming an unknown trigger or squad
//! id are ignored with a warning.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FormationParams, Position, Size};

/// All possible editor/player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Trigger structure ---
    /// Append a new trigger past the furthest existing one.
    AddTrigger,
    /// Remove a trigger, its squads, and their spawned units.
    RemoveTrigger { trigger_id: u32 },
    /// Move a trigger (subject to the constraint passes next tick).
    MoveTrigger { trigger_id: u32, position: Position },

    // --- Squad structure ---
    /// Append a new squad at the end of a trigger's roster.
    AddSquad { trigger_id: u32 },
    /// Insert a new squad before a reference squad in its trigger's roster.
    AddSquadBefore { squad_id: u32 },
    /// Insert a new squad after a reference squad in its trigger's roster.
    AddSquadAfter { squad_id: u32 },
    /// Remove a squad and its spawned units.
    RemoveSquad { squad_id: u32 },

    // --- Squad configuration ---
    SetFormationShape {
        squad_id: u32,
        shape: FormationShape,
    },
    SetFormationParams {
        squad_id: u32,
        params: FormationParams,
    },
    SetDistribution {
        squad_id: u32,
        distribution: DistributionStrategy,
    },
    /// Directly edit one slot of a Custom-shape squad (world coordinates).
    SetCustomPosition {
        squad_id: u32,
        slot: usize,
        position: Position,
    },
    /// Move a squad (clamped to its trigger's bounds next tick).
    MoveSquad { squad_id: u32, position: Position },
    SetSquadYaw { squad_id: u32, yaw: f64 },

    // --- Manager ---
    SetManagerPosition { position: Position },
    /// Perturb the manager scale; the constraint pass resets it to unit.
    SetManagerScale { scale: Size },
    SetSpawnAreaSize { size: Size },
    SetAlignTriggers { enabled: bool },

    // --- Run control ---
    /// Start a run: reset time, spawn the probe, arm all triggers.
    StartRun,
    /// End the run: despawn the probe and all spawned units, back to Setup.
    EndRun,
    Pause,
    Resume,
}
