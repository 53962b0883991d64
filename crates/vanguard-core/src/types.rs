//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in simulation space (meters, Cartesian).
/// x = East, y = North (probe travel axis), z = Up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in simulation space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D extent (meters). Used for the spawn-area size, trigger volumes,
/// and the manager scale. x = width, y = depth along travel, z = height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Formation parameters supplied per squad. Each shape normalizes
/// `num_objects` and `geometry_faces` independently inside the generator;
/// the stored values are only floored to a count of 1 by `set_positions`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationParams {
    /// Requested number of units in the formation.
    pub num_objects: u32,
    /// Requested distance between adjacent units (meters).
    pub spawn_distance: f64,
    /// Face count for Polygon, spoke count for Spoke.
    pub geometry_faces: u32,
    /// Full wedge opening angle in degrees.
    pub wedge_angle_degrees: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Range to another position in meters (3D distance).
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Size {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Unit scale (1, 1, 1).
    pub fn unit() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::unit()
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Default for FormationParams {
    fn default() -> Self {
        Self {
            num_objects: 6,
            spawn_distance: 1.0,
            geometry_faces: 3,
            wedge_angle_degrees: 60.0,
        }
    }
}
