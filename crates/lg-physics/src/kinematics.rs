//! Straight-line movement and arena-edge reflection.

use lg_agent::AgentStore;
use lg_core::geo::normalize_heading;
use lg_core::{AgentId, Bounds, Vec2};

/// Which arena edges an agent was reflected off this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    /// Crossed the left or right edge.
    pub x: bool,
    /// Crossed the top or bottom edge.
    pub y: bool,
}

impl Reflection {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Position after one step of `speed` along `heading`.  No clamping.
#[inline]
pub fn advance(position: Vec2, heading: f64, speed: f64) -> Vec2 {
    position.offset(heading, speed)
}

/// Clamp `position` into `bounds` and reflect `heading` off every crossed edge.
///
/// The axes are checked independently and both may fire:
///
/// - left/right edge: `heading := 180 − heading`
/// - top/bottom edge: `heading := 360 − heading`
pub fn reflect_at_bounds(position: &mut Vec2, heading: &mut f64, bounds: Bounds) -> Reflection {
    let mut r = Reflection::default();

    if position.x > bounds.half_width || position.x < -bounds.half_width {
        position.x = position.x.clamp(-bounds.half_width, bounds.half_width);
        *heading = normalize_heading(180.0 - *heading);
        r.x = true;
    }
    if position.y > bounds.half_height || position.y < -bounds.half_height {
        position.y = position.y.clamp(-bounds.half_height, bounds.half_height);
        *heading = normalize_heading(360.0 - *heading);
        r.y = true;
    }
    r
}

/// Move `agent` one step and reflect it back into the arena.
pub fn move_agent(store: &mut AgentStore, agent: AgentId, bounds: Bounds) -> Reflection {
    let i = agent.index();
    let mut position = advance(store.position[i], store.heading[i], store.speed[i]);
    let mut heading = store.heading[i];
    let r = reflect_at_bounds(&mut position, &mut heading, bounds);
    store.position[i] = position;
    store.heading[i] = heading;
    r
}
