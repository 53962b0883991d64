//! Squad manager state — the engine-owned root of the trigger hierarchy.
//!
//! Kept beside the ECS world, not in it: there is exactly one manager and
//! its fields are engine configuration, not entity data.

use vanguard_core::constants::*;
use vanguard_core::types::{Position, Size};

/// Placement and sizing authority over every trigger and squad.
///
/// The constraint passes re-assert its rules every tick: unit scale, the
/// trigger travel-axis floor, optional lateral alignment, canonical
/// trigger size, and squad containment.
#[derive(Debug, Clone)]
pub struct ManagerState {
    /// World position; triggers stack away from it along +y.
    pub position: Position,
    /// Always reset to unit scale by the first constraint pass.
    pub scale: Size,
    /// Canonical size every trigger volume is forced to.
    pub spawn_area: Size,
    /// When set, triggers share the manager's x/z position.
    pub align_triggers: bool,
}

impl Default for ManagerState {
    fn default() -> Self {
        Self {
            position: Position::default(),
            scale: Size::unit(),
            spawn_area: Size::new(
                DEFAULT_SPAWN_AREA_WIDTH,
                DEFAULT_SPAWN_AREA_DEPTH,
                DEFAULT_SPAWN_AREA_HEIGHT,
            ),
            align_triggers: false,
        }
    }
}
