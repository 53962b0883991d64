//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Only the probe carries a Velocity, but the system is generic over any
//! moving entity.

use hecs::World;

use vanguard_core::constants::DT;
use vanguard_core::types::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;
    }
}
