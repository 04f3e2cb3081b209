//! `lg-physics` — movement and collisions.
//!
//! Everything here is a stateless function of its inputs.  The tick loop in
//! `lg-sim` decides when each one runs.
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`body`]        | `Body` — position/heading/radius view of one circle     |
//! | [`kinematics`]  | `advance`, `reflect_at_bounds`, `move_agent`            |
//! | [`collision`]   | `resolve_pair`, `resolve_agent_pair`, `push_out_of_node`|

pub mod body;
pub mod collision;
pub mod kinematics;


pub use body::Body;
pub use collision::{SEPARATION_SLACK, push_out_of_node, resolve_agent_pair, resolve_pair};
pub use kinematics::{Reflection, advance, move_agent, reflect_at_bounds};
