//! Formation graph linker — wires spawned slots into leader/follower
//! topologies.
//!
//! Produces a per-slot link table over slot indices. Indices are weak
//! handles: the caller maps them onto whatever owns the actual entities.
//! Three topologies, selected by shape:
//!
//! - **Linear** (Line): a single chain from the leader.
//! - **Branched** (Wedge, Spoke): N chains radiating from the leader.
//! - **Split** (Polygon, Circular): a ring cut into two chains meeting at
//!   the leader and at the antipodal point.

use vanguard_core::constants::BRANCH_MIN_COUNT;
use vanguard_core::enums::FormationShape;
use vanguard_core::types::Position;

/// One slot's place in the formation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLink {
    /// Predecessor slot; None only for the leader (slot 0).
    pub prev: Option<usize>,
    /// Successor slots: empty at chain ends, one along a chain, several
    /// for a leader with branches.
    pub next: Vec<usize>,
    /// Hop count to the leader along predecessor links.
    pub order: u32,
    /// Distance to the predecessor's position, 0 for the leader.
    pub spacing: f64,
}

impl SlotLink {
    fn unlinked() -> Self {
        Self {
            prev: None,
            next: Vec::new(),
            order: 0,
            spacing: 0.0,
        }
    }
}

/// Build the link table for spawned slots at the given positions.
///
/// Wedge always links as two branches; Spoke links one branch per
/// geometry face (floored at 2, matching the generator's face minimum).
/// Custom leaves every slot unlinked.
pub fn link(shape: FormationShape, geometry_faces: u32, positions: &[Position]) -> Vec<SlotLink> {
    let mut links = match shape {
        FormationShape::Polygon | FormationShape::Circular => link_split(positions),
        FormationShape::Wedge => link_branched(positions, 2),
        FormationShape::Spoke => {
            link_branched(positions, (geometry_faces as usize).max(BRANCH_MIN_COUNT))
        }
        FormationShape::Line => link_linear(positions),
        FormationShape::Custom => vec![SlotLink::unlinked(); positions.len()],
    };

    assign_orders(&mut links);
    links
}

/// Single chain: slot i follows slot i−1.
fn link_linear(positions: &[Position]) -> Vec<SlotLink> {
    let len = positions.len();
    let mut links = Vec::with_capacity(len);

    for slot in 0..len {
        let mut link = SlotLink::unlinked();

        if slot == 0 {
            if len > 1 {
                link.next.push(1);
            }
        } else {
            link.prev = Some(slot - 1);
            if slot < len - 1 {
                link.next.push(slot + 1);
            }
            link.spacing = positions[slot].range_to(&positions[slot - 1]);
        }

        links.push(link);
    }

    links
}

/// N chains radiating from the leader: slot i chains to slot i−branches.
fn link_branched(positions: &[Position], branches: usize) -> Vec<SlotLink> {
    let len = positions.len();
    let mut links = Vec::with_capacity(len);

    for slot in 0..len {
        let mut link = SlotLink::unlinked();

        if slot == 0 {
            // The leader picks up the first slot of each branch, but only
            // once there are enough slots to form branches at all.
            if len > 2 {
                link.next.extend(1..=branches.min(len - 1));
            }
        } else {
            // Slots within the first ring hang off the leader directly.
            let prev = if slot > branches { slot - branches } else { 0 };
            link.prev = Some(prev);

            if slot + branches < len {
                link.next.push(slot + branches);
            }

            link.spacing = positions[slot].range_to(&positions[prev]);
        }

        links.push(link);
    }

    links
}

/// Ring cut into two chains: the first arm runs forward from the leader,
/// the second runs backward from the last slot, and the two arm ends meet
/// at the antipode with no successor.
fn link_split(positions: &[Position]) -> Vec<SlotLink> {
    let len = positions.len();
    let half = len as f64 / 2.0;
    let mut links = Vec::with_capacity(len);

    for slot in 0..len {
        let mut link = SlotLink::unlinked();

        if slot == 0 {
            if len > 2 {
                link.next.push(1);
                link.next.push(len - 1);
            }
        } else if slot as f64 >= half {
            // Second arm: chains backward, the last slot hanging off the
            // leader.
            let prev = if slot == len - 1 { 0 } else { slot + 1 };
            link.prev = Some(prev);

            if slot != half.ceil() as usize {
                link.next.push(slot - 1);
            }

            link.spacing = positions[slot].range_to(&positions[prev]);
        } else {
            // First arm: chains forward until the midpoint.
            link.prev = Some(slot - 1);

            if ((slot + 1) as f64) < half {
                link.next.push(slot + 1);
            }

            link.spacing = positions[slot].range_to(&positions[slot - 1]);
        }

        links.push(link);
    }

    links
}

/// Assign each slot's formation order by walking its predecessor chain to
/// the leader. The walk is bounded by the slot count so a malformed table
/// cannot loop forever.
fn assign_orders(links: &mut [SlotLink]) {
    let len = links.len();

    for slot in 0..len {
        let mut order = 0u32;
        let mut cursor = slot;

        while let Some(prev) = links[cursor].prev {
            order += 1;
            cursor = prev;
            if order as usize >= len {
                break;
            }
        }

        links[slot].order = order;
    }
}
