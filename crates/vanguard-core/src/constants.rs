//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Probe ---

/// Probe travel speed along the +y axis (m/s).
pub const PROBE_SPEED: f64 = 5.0;

/// Distance past the far face of the furthest trigger at which
/// a run is considered complete (meters).
pub const RUN_END_MARGIN: f64 = 1.0;

// --- Formation generator ---

/// Minimum object count for a Line formation.
pub const LINE_MIN_COUNT: u32 = 1;

/// Minimum object count for a Circular formation; below this the ring
/// degenerates and the count is raised.
pub const CIRCULAR_MIN_COUNT: u32 = 3;

/// Minimum face count for a Polygon formation.
pub const POLYGON_MIN_FACES: u32 = 3;

/// Minimum spoke count for a Spoke formation.
pub const SPOKE_MIN_FACES: u32 = 2;

/// Half-angle substituted when the requested wedge angle is a multiple
/// of 360 degrees and the two branches would collapse onto one ray.
pub const WEDGE_FALLBACK_HALF_ANGLE_DEG: f64 = 1.0;

/// Minimum branch count accepted by the branched link topology.
pub const BRANCH_MIN_COUNT: usize = 2;

// --- Manager defaults ---

/// Default spawn-area width (x, meters).
pub const DEFAULT_SPAWN_AREA_WIDTH: f64 = 20.0;

/// Default spawn-area depth along the probe travel axis (y, meters).
/// Half of this is the floor distance between the manager and any trigger.
pub const DEFAULT_SPAWN_AREA_DEPTH: f64 = 10.0;

/// Default spawn-area height (z, meters).
pub const DEFAULT_SPAWN_AREA_HEIGHT: f64 = 6.0;

// --- Custom shape ---

/// Slot spacing when seeding custom positions as a straight line (meters).
pub const CUSTOM_SEED_SPACING: f64 = 1.0;

/// Forward offset between appended slots when a custom formation grows (meters).
pub const CUSTOM_GROWTH_SPACING: f64 = 1.0;
