//! Tests for the formation generator and graph linker.

use glam::DVec2;

use vanguard_core::enums::FormationShape;
use vanguard_core::types::Position;

use crate::generator;
use crate::linker::{self, SlotLink};

const EPS: f64 = 1e-9;

fn positions_from_offsets(offsets: &[DVec2]) -> Vec<Position> {
    offsets
        .iter()
        .map(|o| Position::new(o.x, o.y, 0.0))
        .collect()
}

// ---- Generator: determinism ----

#[test]
fn test_generate_deterministic_all_shapes() {
    let shapes = [
        FormationShape::Polygon,
        FormationShape::Circular,
        FormationShape::Wedge,
        FormationShape::Spoke,
        FormationShape::Line,
        FormationShape::Custom,
    ];

    for shape in shapes {
        let a = generator::generate(shape, 10, 2.5, 4, 70.0);
        let b = generator::generate(shape, 10, 2.5, 4, 70.0);
        assert_eq!(a, b, "{shape:?} should be deterministic");
    }
}

// ---- Generator: line ----

#[test]
fn test_line_layout() {
    let offsets = generator::line(4, 2.0);
    assert_eq!(offsets.len(), 4);
    for (i, offset) in offsets.iter().enumerate() {
        assert!((offset.x - i as f64 * 2.0).abs() < EPS);
        assert!((offset.y - i as f64 * 2.0).abs() < EPS);
    }
}

#[test]
fn test_line_count_floor() {
    assert_eq!(generator::line(0, 1.0).len(), 1);
}

// ---- Generator: circular ----

#[test]
fn test_circular_count_floor() {
    assert_eq!(generator::circular(1, 1.0).len(), 3);
}

#[test]
fn test_circular_chord_equals_spawn_distance() {
    // The requested spacing is the chord between adjacent points, not the
    // radius.
    let spawn = 2.0;
    let offsets = generator::circular(8, spawn);
    assert_eq!(offsets.len(), 8);

    for i in 0..8 {
        let chord = offsets[i].distance(offsets[(i + 1) % 8]);
        assert!(
            (chord - spawn).abs() < 1e-6,
            "chord {i} was {chord}, expected {spawn}"
        );
    }
}

#[test]
fn test_circular_first_point_straight_ahead() {
    let offsets = generator::circular(6, 1.0);
    // Slot 0 is at bearing 0: straight up from the center.
    assert!(offsets[0].x.abs() < EPS);
    assert!(offsets[0].y > 0.0);
}

// ---- Generator: polygon ----

#[test]
fn test_polygon_count_rounds_down_to_face_multiple() {
    let offsets = generator::polygon(10, 1.0, 4);
    assert_eq!(offsets.len(), 8, "10 should round down to 8 for 4 faces");
}

#[test]
fn test_polygon_count_raised_to_faces() {
    let offsets = generator::polygon(2, 1.0, 4);
    assert_eq!(offsets.len(), 4, "2 should be raised to the 4 faces");
}

#[test]
fn test_polygon_faces_floor() {
    // Faces below 3 are clamped to 3.
    let offsets = generator::polygon(6, 1.0, 1);
    assert_eq!(offsets.len(), 6);
}

#[test]
fn test_polygon_ring_closes_at_leader() {
    // The cursor walks the full perimeter; slot 0 is written last and
    // lands back at the origin.
    for faces in 3..=6 {
        let offsets = generator::polygon(faces * 2, 1.5, faces);
        let leader = offsets[0];
        assert!(
            leader.length() < 1e-6,
            "{faces}-gon leader should close at origin, was {leader}"
        );
    }
}

#[test]
fn test_polygon_side_length_equals_spawn_distance() {
    let spawn = 2.0;
    let offsets = generator::polygon(8, spawn, 4);
    for i in 1..offsets.len() {
        let step = offsets[i].distance(offsets[i - 1]);
        assert!(
            (step - spawn).abs() < 1e-6,
            "step {i} was {step}, expected {spawn}"
        );
    }
}

// ---- Generator: wedge ----

#[test]
fn test_wedge_count_forced_odd() {
    assert_eq!(generator::wedge(4, 1.0, 60.0).len(), 3);
    assert_eq!(generator::wedge(0, 1.0, 60.0).len(), 1);
    assert_eq!(generator::wedge(7, 1.0, 60.0).len(), 7);
}

#[test]
fn test_wedge_degenerate_angle_falls_back() {
    // A full angle that is a multiple of 360 collapses both branches onto
    // one ray; the half-angle falls back to 1 degree.
    let offsets = generator::wedge(3, 1.0, 360.0);
    let half_rad = 1.0f64.to_radians();
    // Narrow angle also triggers the chord correction.
    let spacing = 0.5 / half_rad.sin();

    assert!((offsets[1].x - spacing * half_rad.sin()).abs() < 1e-6);
    assert!((offsets[1].y - spacing * half_rad.cos()).abs() < 1e-6);
}

#[test]
fn test_wedge_branches_mirror() {
    let offsets = generator::wedge(7, 1.0, 90.0);
    for pair in (1..7).step_by(2) {
        assert!((offsets[pair].x + offsets[pair + 1].x).abs() < EPS);
        assert!((offsets[pair].y - offsets[pair + 1].y).abs() < EPS);
    }
    // Leader at the origin, branches opening forward.
    assert_eq!(offsets[0], DVec2::ZERO);
    assert!(offsets[1].y > 0.0);
}

#[test]
fn test_wedge_narrow_angle_inflates_spacing() {
    // At 20 degrees the half-angle is 10: sin(10 deg) < 1/2, so spacing is
    // inflated to keep the side-to-side separation at one spawn distance.
    let offsets = generator::wedge(3, 1.0, 20.0);
    let lateral = offsets[1].x - offsets[2].x;
    assert!(
        (lateral - 1.0).abs() < 1e-6,
        "side-to-side separation should equal the spawn distance, was {lateral}"
    );
}

// ---- Generator: spoke ----

#[test]
fn test_spoke_full_rings_kept() {
    // (10 - 1) = 9 is a multiple of 3: one leader plus three rings.
    assert_eq!(generator::spoke(10, 1.0, 3).len(), 10);
}

#[test]
fn test_spoke_partial_ring_rounds_down() {
    // (9 - 1) = 8 is not a multiple of 3; drop the partial ring.
    assert_eq!(generator::spoke(9, 1.0, 3).len(), 7);
}

#[test]
fn test_spoke_collapses_to_leader() {
    // Cannot reach one full ring of 3.
    assert_eq!(generator::spoke(3, 1.0, 3).len(), 1);
    assert_eq!(generator::spoke(0, 1.0, 3).len(), 1);
}

#[test]
fn test_spoke_faces_floor() {
    // Faces below 2 are clamped to 2.
    assert_eq!(generator::spoke(5, 1.0, 0).len(), 5);
}

#[test]
fn test_spoke_rungs_step_outward() {
    let offsets = generator::spoke(7, 2.0, 3);
    // Slots 1..=3 are ring 1, slots 4..=6 are ring 2 on the same spokes.
    for slot in 1..=3usize {
        let inner = offsets[slot].length();
        let outer = offsets[slot + 3].length();
        assert!((outer - 2.0 * inner).abs() < 1e-6);
        // Same bearing along the spoke.
        let cross = offsets[slot].perp_dot(offsets[slot + 3]);
        assert!(cross.abs() < 1e-6);
    }
}

// ---- Linker: shared invariants ----

fn assert_link_invariants(links: &[SlotLink], positions: &[Position]) {
    let leaders: Vec<usize> = (0..links.len())
        .filter(|&i| links[i].prev.is_none())
        .collect();
    assert_eq!(leaders, vec![0], "slot 0 must be the only leader");

    for (slot, link) in links.iter().enumerate() {
        // Walking predecessors reaches the leader in exactly `order` hops.
        let mut cursor = slot;
        let mut hops = 0u32;
        while let Some(prev) = links[cursor].prev {
            cursor = prev;
            hops += 1;
            assert!(
                (hops as usize) <= links.len(),
                "predecessor walk from {slot} did not terminate"
            );
        }
        assert_eq!(cursor, 0);
        assert_eq!(hops, link.order, "order mismatch at slot {slot}");

        // Spacing is the distance to the immediate predecessor.
        match link.prev {
            Some(prev) => {
                let expected = positions[slot].range_to(&positions[prev]);
                assert!((link.spacing - expected).abs() < EPS);
            }
            None => assert_eq!(link.spacing, 0.0),
        }
    }
}

// ---- Linker: linear ----

#[test]
fn test_linear_chain_of_five() {
    let offsets = generator::line(5, 1.0);
    let positions = positions_from_offsets(&offsets);
    let links = linker::link(FormationShape::Line, 3, &positions);

    assert_link_invariants(&links, &positions);

    assert_eq!(links[0].prev, None);
    assert_eq!(links[0].next, vec![1]);
    assert_eq!(links[4].prev, Some(3));
    assert!(links[4].next.is_empty());

    for (slot, link) in links.iter().enumerate() {
        assert_eq!(link.order, slot as u32, "order equals index on a chain");
    }
}

#[test]
fn test_linear_single_slot() {
    let positions = positions_from_offsets(&generator::line(1, 1.0));
    let links = linker::link(FormationShape::Line, 3, &positions);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].prev, None);
    assert!(links[0].next.is_empty());
}

// ---- Linker: branched ----

#[test]
fn test_branched_two_branches_on_five() {
    let offsets = generator::wedge(5, 1.0, 60.0);
    let positions = positions_from_offsets(&offsets);
    let links = linker::link(FormationShape::Wedge, 3, &positions);

    assert_link_invariants(&links, &positions);

    // Leader heads both branches.
    assert_eq!(links[0].next, vec![1, 2]);
    // Chains advance by the branch count.
    assert_eq!(links[1].next, vec![3]);
    assert_eq!(links[2].next, vec![4]);
    assert_eq!(links[3].prev, Some(1));
    assert_eq!(links[4].prev, Some(2));
    assert!(links[3].next.is_empty());
    assert!(links[4].next.is_empty());

    assert_eq!(links[3].order, 2);
    assert_eq!(links[4].order, 2);
}

#[test]
fn test_branched_terminal_end_at_length_four() {
    // With 4 slots and 2 branches, slot 2 has no successor: slot 4 does
    // not exist.
    let positions = positions_from_offsets(&generator::wedge(5, 1.0, 60.0))[..4].to_vec();
    let links = linker::link(FormationShape::Wedge, 3, &positions);

    assert_eq!(links[1].next, vec![3]);
    assert!(links[2].next.is_empty());
}

#[test]
fn test_branched_spoke_uses_face_count() {
    let offsets = generator::spoke(7, 1.0, 3);
    let positions = positions_from_offsets(&offsets);
    let links = linker::link(FormationShape::Spoke, 3, &positions);

    assert_link_invariants(&links, &positions);

    assert_eq!(links[0].next, vec![1, 2, 3]);
    for slot in 1..=3usize {
        assert_eq!(links[slot].prev, Some(0));
        assert_eq!(links[slot].next, vec![slot + 3]);
        assert_eq!(links[slot + 3].prev, Some(slot));
        assert_eq!(links[slot + 3].order, 2);
    }
}

#[test]
fn test_branched_two_slots_has_no_leader_fanout() {
    // Below 3 slots the leader gains no successor list.
    let positions = positions_from_offsets(&generator::line(2, 1.0));
    let links = linker::link(FormationShape::Wedge, 3, &positions);

    assert!(links[0].next.is_empty());
    assert_eq!(links[1].prev, Some(0));
}

// ---- Linker: split ----

#[test]
fn test_split_ring_of_six() {
    let offsets = generator::circular(6, 1.0);
    let positions = positions_from_offsets(&offsets);
    let links = linker::link(FormationShape::Circular, 3, &positions);

    assert_link_invariants(&links, &positions);

    // Leader heads both arms: the next slot and the last slot.
    assert_eq!(links[0].next, vec![1, 5]);

    // First arm chains forward and ends at slot 2.
    assert_eq!(links[1].prev, Some(0));
    assert_eq!(links[1].next, vec![2]);
    assert_eq!(links[2].prev, Some(1));
    assert!(links[2].next.is_empty());

    // Second arm chains backward from the last slot and ends at slot 3.
    assert_eq!(links[5].prev, Some(0));
    assert_eq!(links[5].next, vec![4]);
    assert_eq!(links[4].prev, Some(5));
    assert_eq!(links[4].next, vec![3]);
    assert_eq!(links[3].prev, Some(4));
    assert!(links[3].next.is_empty());

    // Both arm walks terminate at the leader sharing no intermediate node.
    let walk = |start: usize| -> Vec<usize> {
        let mut chain = Vec::new();
        let mut cursor = start;
        while let Some(prev) = links[cursor].prev {
            chain.push(prev);
            cursor = prev;
        }
        chain
    };
    let from_two = walk(2);
    let from_three = walk(3);
    assert_eq!(from_two.last(), Some(&0));
    assert_eq!(from_three.last(), Some(&0));
    let shared: Vec<&usize> = from_two
        .iter()
        .filter(|s| **s != 0 && from_three.contains(s))
        .collect();
    assert!(shared.is_empty(), "arms must only meet at the leader");
}

#[test]
fn test_split_polygon_orders() {
    let offsets = generator::polygon(8, 1.0, 4);
    let positions = positions_from_offsets(&offsets);
    let links = linker::link(FormationShape::Polygon, 4, &positions);

    assert_link_invariants(&links, &positions);

    // Orders grow along both arms toward the antipode.
    assert_eq!(links[1].order, 1);
    assert_eq!(links[7].order, 1);
    assert_eq!(links[2].order, 2);
    assert_eq!(links[6].order, 2);
    assert_eq!(links[3].order, 3);
    assert_eq!(links[5].order, 3);
    assert_eq!(links[4].order, 4);
}

#[test]
fn test_split_odd_ring() {
    let offsets = generator::circular(5, 1.0);
    let positions = positions_from_offsets(&offsets);
    let links = linker::link(FormationShape::Circular, 3, &positions);

    assert_link_invariants(&links, &positions);

    // len 5: first arm is slots 1..=2, second arm is slots 3..=4, and the
    // arm ends (2 and 3) have no successor.
    assert!(links[2].next.is_empty());
    assert!(links[3].next.is_empty());
    assert_eq!(links[4].prev, Some(0));
}

// ---- Linker: custom ----

#[test]
fn test_custom_slots_unlinked() {
    let positions = vec![
        Position::new(0.0, 0.0, 0.0),
        Position::new(1.0, 0.0, 0.0),
        Position::new(2.0, 0.0, 0.0),
    ];
    let links = linker::link(FormationShape::Custom, 3, &positions);

    for link in &links {
        assert_eq!(link.prev, None);
        assert!(link.next.is_empty());
        assert_eq!(link.order, 0);
        assert_eq!(link.spacing, 0.0);
    }
}
