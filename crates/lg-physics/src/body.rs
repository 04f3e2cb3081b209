//! A circular moving entity, detached from storage.

use lg_agent::AgentStore;
use lg_core::{AgentId, Vec2};

/// The kinematic part of one agent, copied out of [`AgentStore`] so the
/// collision math can work on plain values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    /// Degrees in `[0, 360)`.
    pub heading:  f64,
    pub radius:   f64,
}

impl Body {
    #[inline]
    pub fn new(position: Vec2, heading: f64, radius: f64) -> Self {
        Self { position, heading, radius }
    }

    /// Copy `agent`'s body out of `store`.
    #[inline]
    pub fn of(store: &AgentStore, agent: AgentId) -> Self {
        let i = agent.index();
        Self::new(store.position[i], store.heading[i], store.radius[i])
    }

    /// Write position and heading back to `store`.  Radius is immutable.
    #[inline]
    pub fn store_into(self, store: &mut AgentStore, agent: AgentId) {
        let i = agent.index();
        store.position[i] = self.position;
        store.heading[i] = self.heading;
    }
}
