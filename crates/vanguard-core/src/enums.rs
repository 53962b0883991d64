//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Formation layout pattern for a squad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationShape {
    /// Closed ring walked as an N-sided polygon.
    Polygon,
    /// Points evenly spaced on a circle, adjacent points one spawn distance apart.
    Circular,
    /// Two mirrored branches opening forward from a single leader.
    Wedge,
    /// N straight spokes radiating from a central leader.
    Spoke,
    /// Single diagonal file. The default for a freshly created squad.
    #[default]
    Line,
    /// Positions supplied by direct edits, no generated layout.
    Custom,
}

/// Unit template selected by a distribution strategy.
/// Stands in for a prefab reference; `None` in a strategy slot means the
/// reference is missing and spawning must be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitArchetype {
    /// Basic expendable airframe.
    Drone,
    /// Standard line unit.
    Fighter,
    /// Heavy fire-support unit.
    Gunship,
    /// Veteran unit, typical leader pick.
    Ace,
}

/// Policy choosing which archetype to instantiate for each formation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistributionStrategy {
    /// Every slot from the one default archetype.
    Default { prefab: Option<UnitArchetype> },
    /// Slot 0 from the leader archetype, all others from the default.
    AlternateLeader {
        prefab: Option<UnitArchetype>,
        leader: Option<UnitArchetype>,
    },
    /// Slot i from the i-th override when present, else the default.
    /// The override list may be shorter than the slot count.
    Custom {
        prefab: Option<UnitArchetype>,
        overrides: Vec<Option<UnitArchetype>>,
    },
}

impl Default for DistributionStrategy {
    fn default() -> Self {
        Self::Default { prefab: None }
    }
}

/// Why a squad's spawn was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnRefusal {
    /// The strategy's default archetype reference is missing.
    MissingDefaultPrefab,
    /// AlternateLeader without a leader archetype reference.
    MissingLeaderPrefab,
}

/// Simulation phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Structural editing; constraint passes run, the probe does not.
    #[default]
    Setup,
    /// A run is in progress: the probe advances and triggers fire.
    Active,
    Paused,
    /// The probe passed the last trigger; spawned units remain for inspection.
    RunComplete,
}
