//! Circle–circle collision resolution.
//!
//! Two flavours:
//!
//! - **agent–agent** ([`resolve_pair`]): both circles move apart by half the
//!   overlap plus [`SEPARATION_SLACK`], and each turns to face directly away
//!   from the other.
//! - **agent–node** ([`push_out_of_node`]): the node never moves; the agent
//!   is pushed out along the node→agent line by the full overlap and its
//!   heading is reversed.
//!
//! Coincident centres have no defined bearing; `0°` is used, so the pair
//! separates along the x axis.

use lg_agent::{AgentStore, FixedNode};
use lg_core::AgentId;
use lg_core::geo::reverse_heading;

use crate::Body;

/// Extra separation added to every agent–agent resolution so the pair ends
/// strictly further apart than the sum of radii.
pub const SEPARATION_SLACK: f64 = 0.1;

/// Separate `a` and `b` if they overlap.  Returns `true` if they did.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let reach = a.radius + b.radius;
    let distance = a.position.distance(b.position);
    if distance >= reach {
        return false;
    }

    let overlap = reach - distance + SEPARATION_SLACK;
    let a_to_b = a.position.towards(b.position);
    let away_from_b = reverse_heading(a_to_b);

    a.position = a.position.offset(away_from_b, overlap / 2.0);
    b.position = b.position.offset(a_to_b, overlap / 2.0);
    a.heading = away_from_b;
    b.heading = a_to_b;
    true
}

/// [`resolve_pair`] applied to two agents in `store`.
pub fn resolve_agent_pair(store: &mut AgentStore, a: AgentId, b: AgentId) -> bool {
    let mut body_a = Body::of(store, a);
    let mut body_b = Body::of(store, b);
    if !resolve_pair(&mut body_a, &mut body_b) {
        return false;
    }
    body_a.store_into(store, a);
    body_b.store_into(store, b);
    true
}

/// Push `body` out of `node` if they overlap.  Returns `true` on contact.
pub fn push_out_of_node(body: &mut Body, node: &FixedNode) -> bool {
    let reach = node.collision_radius + body.radius;
    let distance = body.position.distance(node.position);
    if distance >= reach {
        return false;
    }

    let outward = node.position.towards(body.position);
    body.position = body.position.offset(outward, reach - distance);
    body.heading = reverse_heading(body.heading);
    true
}
