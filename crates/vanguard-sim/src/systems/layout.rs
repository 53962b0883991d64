//! Absolute-position refresh system.
//!
//! Recomputes every squad's absolute positions from its stored relative
//! offsets and current transform each tick, keeping "shape in local
//! space" decoupled from "world placement" as squads move and rotate.

use hecs::World;

use vanguard_core::components::{FormationLayout, Orientation};
use vanguard_core::types::Position;

use crate::squad::rotate_offset;

pub fn run(world: &mut World) {
    for (_entity, (layout, position, orientation)) in
        world.query_mut::<(&mut FormationLayout, &Position, &Orientation)>()
    {
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
