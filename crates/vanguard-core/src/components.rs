//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Squad logic lives in systems and squad operations, not components.
//!
//! Entity handles inside components (owner back-references, formation
//! links, spawned-unit lists) are weak: they never own the entity they
//! point at, and they are skipped by serde since `hecs::Entity` ids are
//! only meaningful within a live world.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FormationParams, Position};

/// Activation volume of a squad trigger, centered on the trigger's Position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerVolume {
    /// Stable trigger id assigned at creation.
    pub id: u32,
    /// Display name, rewritten by the rename pass after structural edits.
    pub name: String,
    /// Full extent of the volume on each axis.
    pub size: crate::types::Size,
    /// Whether the probe was inside the volume last tick (entry-edge state).
    pub probe_inside: bool,
}

/// Ordered list of squads owned by a trigger. List order is the spawn order.
#[derive(Debug, Clone, Default)]
pub struct SquadRoster {
    pub squads: Vec<hecs::Entity>,
}

/// Formation and distribution configuration of a squad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadConfig {
    /// Stable squad id assigned at creation.
    pub id: u32,
    /// Display name, rewritten by the rename pass after structural edits.
    pub name: String,
    pub shape: FormationShape,
    pub params: FormationParams,
    pub distribution: DistributionStrategy,
}

/// Generated formation positions of a squad.
///
/// `relative_offsets` is the shape in the squad's local frame (slot 0 is
/// the leader). `absolute_positions` is the same shape pushed through the
/// squad's current yaw and translation; the layout system rewrites it
/// every tick, it is never authoritative on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationLayout {
    pub relative_offsets: Vec<glam::DVec2>,
    pub absolute_positions: Vec<Position>,
}

/// World yaw of a squad or unit: a bearing in radians, 0 = North, clockwise.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f64,
}

/// Back-reference from a squad to the trigger that owns it.
/// Populated at creation by the manager, never absent afterward.
#[derive(Debug, Clone, Copy)]
pub struct OwnerTrigger {
    pub trigger: hecs::Entity,
}

/// Units a squad has spawned during the current run. Owned handles in the
/// sense that despawning the squad despawns these; empty until the squad's
/// trigger first fires.
#[derive(Debug, Clone, Default)]
pub struct SpawnedUnits {
    pub units: Vec<hecs::Entity>,
}

/// A spawned unit's identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitBody {
    pub archetype: UnitArchetype,
    /// Id of the squad that spawned this unit.
    pub squad_id: u32,
}

/// A spawned unit's place in the formation graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationMember {
    /// Index of this unit in the squad's spawn order.
    pub slot: usize,
    /// The absolute position this unit was spawned at.
    pub formation_position: Position,
    pub is_leader: bool,
    /// Hop count to the leader along predecessor links.
    pub formation_order: u32,
    /// Distance to the immediate predecessor at spawn time, 0 for the leader.
    pub formation_spacing: f64,
    #[serde(skip)]
    pub prev_in_formation: Option<hecs::Entity>,
    #[serde(skip)]
    pub next_in_formation: Vec<hecs::Entity>,
}

/// Marks a unit whose external AI hook has run. Attached last in the
/// spawn pipeline, after linking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AiReady;

/// Marks the probe entity (the triggering actor of the current run).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Probe;
