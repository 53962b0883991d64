//! Squad-system snapshot — the complete visible state sent to the frontend
//! each tick.
//!
//! Lists are nested (manager → triggers → squads → units) because list
//! order is semantic: it is the manager/roster order, not entity-id order.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FormationParams, Position, SimTime, Size};

/// Complete squad-system state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SquadSystemSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub manager: ManagerView,
    /// Triggers in manager order.
    pub triggers: Vec<TriggerView>,
    /// The probe, present only during a run.
    pub probe: Option<ProbeView>,
    /// Events emitted during this tick.
    pub events: Vec<crate::events::SquadEvent>,
}

/// Manager state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagerView {
    pub position: Position,
    pub scale: Size,
    pub spawn_area: Size,
    pub align_triggers: bool,
}

/// One trigger and its roster, in roster order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerView {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub size: Size,
    pub probe_inside: bool,
    pub squads: Vec<SquadView>,
}

/// One squad's configuration, layout, and spawned units (slot order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadView {
    pub id: u32,
    pub name: String,
    pub shape: FormationShape,
    pub params: FormationParams,
    pub distribution: DistributionStrategy,
    pub position: Position,
    /// Bearing in radians, 0 = North, clockwise.
    pub yaw: f64,
    pub relative_offsets: Vec<glam::DVec2>,
    pub absolute_positions: Vec<Position>,
    pub units: Vec<UnitView>,
}

/// One spawned unit and its place in the formation graph. Graph links are
/// reported as slot indices, resolved from the weak entity handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub slot: usize,
    pub archetype: UnitArchetype,
    pub position: Position,
    pub is_leader: bool,
    pub formation_order: u32,
    pub formation_spacing: f64,
    pub prev_slot: Option<usize>,
    pub next_slots: Vec<usize>,
    pub ai_ready: bool,
}

/// Probe position for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeView {
    pub position: Position,
}
