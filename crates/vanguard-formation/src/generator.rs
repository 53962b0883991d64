//! Formation generator — produces a sequence of relative 2D offsets for a
//! requested shape and parameter set.
//!
//! Deterministic: identical inputs always yield an identical sequence.
//! Out-of-range parameters are normalized locally (clamped counts, face
//! minimums, chord-corrected spacing), never rejected; the caller's stored
//! parameters are untouched. Slot 0 is always the formation's logical
//! leader/origin point.
//!
//! Offsets lie in the ground plane: x = lateral (East), y = forward
//! (North). Angles are bearings, measured from +y clockwise, so a point at
//! bearing `a` and radius `r` is (r·sin a, r·cos a).

use glam::DVec2;

use vanguard_core::constants::*;
use vanguard_core::enums::FormationShape;

/// Generate relative offsets for the given shape.
///
/// Custom produces no offsets — custom positions are supplied and
/// maintained externally by direct edits.
pub fn generate(
    shape: FormationShape,
    num_objects: u32,
    spawn_distance: f64,
    geometry_faces: u32,
    wedge_angle_degrees: f64,
) -> Vec<DVec2> {
    match shape {
        FormationShape::Polygon => polygon(num_objects, spawn_distance, geometry_faces),
        FormationShape::Circular => circular(num_objects, spawn_distance),
        FormationShape::Wedge => wedge(num_objects, spawn_distance, wedge_angle_degrees),
        FormationShape::Spoke => spoke(num_objects, spawn_distance, geometry_faces),
        FormationShape::Line => line(num_objects, spawn_distance),
        FormationShape::Custom => Vec::new(),
    }
}

/// Single diagonal file: offset[i] = (i·d, i·d).
pub fn line(num_objects: u32, spawn_distance: f64) -> Vec<DVec2> {
    let count = num_objects.max(LINE_MIN_COUNT) as usize;

    (0..count)
        .map(|i| DVec2::splat(i as f64 * spawn_distance))
        .collect()
}

/// Points evenly spaced on a circle.
///
/// The requested spawn distance is the chord between adjacent points, not
/// the radius: radius = (d/2) / sin(separation/2).
pub fn circular(num_objects: u32, spawn_distance: f64) -> Vec<DVec2> {
    // Below 3 points the ring degenerates: sin(0) == sin(180) would put
    // two points on top of each other.
    let count = num_objects.max(CIRCULAR_MIN_COUNT) as usize;

    let separation = 360.0 / count as f64;
    let radius = (spawn_distance / 2.0) / (separation / 2.0).to_radians().sin();

    (0..count)
        .map(|i| {
            let bearing = (separation * i as f64).to_radians();
            DVec2::new(radius * bearing.sin(), radius * bearing.cos())
        })
        .collect()
}

/// Closed ring walked as an N-sided polygon.
///
/// The object count is normalized to a multiple of the face count: raised
/// to it if below, otherwise rounded down (never up). The cursor walks the
/// perimeter one spawn-distance step per slot, turning by the exterior
/// angle between sides; slots are filled from the last index backward, so
/// slot 0 lands back at the origin once the ring closes.
pub fn polygon(num_objects: u32, spawn_distance: f64, geometry_faces: u32) -> Vec<DVec2> {
    let faces = geometry_faces.max(POLYGON_MIN_FACES);

    // Exterior angle of a regular N-gon, via the interior angle sum.
    let exterior = 180.0 - ((((faces as f64 - 3.0) * 180.0) + 180.0) / faces as f64);

    let count = if num_objects < faces {
        faces
    } else {
        num_objects - num_objects % faces
    } as usize;
    let per_side = count / faces as usize;

    // Initial heading: half an exterior angle off straight-right, so the
    // default ring is centered above the origin.
    let heading0 = 180.0 - (180.0 - exterior) / 2.0;

    let mut cursor = DVec2::ZERO;
    let mut offsets = vec![DVec2::ZERO; count];

    for slot in (0..count).rev() {
        let side = slot / per_side;
        let heading = (heading0 + exterior * side as f64).to_radians();

        cursor.x += spawn_distance * heading.sin();
        cursor.y += spawn_distance * heading.cos();

        offsets[slot] = cursor;
    }

    offsets
}

/// Two mirrored branches opening forward from a single leader.
///
/// The wedge angle is halved (the shape is reflected across the vertical
/// axis). An angle that is a multiple of 360° would collapse both branches
/// onto one ray, so the half-angle falls back to 1°. The object count is
/// forced odd so the wedge balances around the leader.
pub fn wedge(num_objects: u32, spawn_distance: f64, wedge_angle_degrees: f64) -> Vec<DVec2> {
    let mut half_angle = wedge_angle_degrees / 2.0;
    if wedge_angle_degrees % 360.0 == 0.0 {
        half_angle = WEDGE_FALLBACK_HALF_ANGLE_DEG;
    }

    // Keep the side-to-side separation at least one spawn distance by
    // inflating the along-branch spacing when the angle is narrow.
    let mut spacing = spawn_distance;
    let half_rad = half_angle.to_radians();
    if spacing * half_rad.sin() < spacing / 2.0 {
        spacing = (spacing / 2.0) / half_rad.sin();
    }

    let count = if num_objects % 2 == 0 {
        if num_objects < 1 {
            1
        } else {
            num_objects - 1
        }
    } else {
        num_objects
    } as usize;

    let step = DVec2::new(spacing * half_rad.sin(), spacing * half_rad.cos());

    let mut offsets = vec![DVec2::ZERO; count];
    let mut cursor = DVec2::ZERO;

    // Leader at the origin; each pair advances one step along the
    // half-angle and mirrors across the vertical axis.
    let mut slot = 1;
    while slot < count {
        cursor += step;
        offsets[slot] = cursor;
        offsets[slot + 1] = DVec2::new(-cursor.x, cursor.y);
        slot += 2;
    }

    offsets
}

/// N straight spokes radiating from a central leader.
///
/// (count − 1) is normalized to a multiple of the spoke count — one leader
/// plus full rings only. If the count cannot reach one full ring it
/// collapses to the leader alone. Slot i sits on spoke (i mod faces) at
/// ring ceil(i / faces).
pub fn spoke(num_objects: u32, spawn_distance: f64, geometry_faces: u32) -> Vec<DVec2> {
    let faces = geometry_faces.max(SPOKE_MIN_FACES);

    let separation = 360.0 / faces as f64;

    // Same chord correction as the ring shapes, against the angle between
    // adjacent spokes.
    let mut spacing = spawn_distance;
    let sep_half = (separation / 2.0).to_radians();
    if spacing * sep_half.sin() < spacing / 2.0 {
        spacing = (spacing / 2.0) / sep_half.sin();
    }

    let count = if num_objects == 0 {
        1
    } else if (num_objects - 1) % faces != 0 {
        if num_objects < faces + 1 {
            1
        } else {
            num_objects - (num_objects - 1) % faces
        }
    } else {
        num_objects
    } as usize;

    let mut offsets = vec![DVec2::ZERO; count];

    for (slot, offset) in offsets.iter_mut().enumerate().skip(1) {
        let rung = (slot as f64 / faces as f64).ceil();
        let bearing = (separation * ((slot % faces as usize) + 1) as f64).to_radians();
        *offset = DVec2::new(
            spacing * rung * bearing.sin(),
            spacing * rung * bearing.cos(),
        );
    }

    offsets
}
