//! Core agent storage: `AgentStore` (SoA data).
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let p = store.position[agent.index()];
//! ```
//!
//! The tick loop mutates agents one at a time in ascending id order, so plain
//! indexed writes are enough; there is no parallel phase to split borrows for.

use lg_core::{AgentId, LgError, LgResult, Vec2};

use crate::{Barrier, GateTable};

/// Everything needed to add one agent to the store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSpawn {
    pub position: Vec2,
    /// Degrees in `[0, 360)`.
    pub heading:  f64,
    /// Raw talent draw (or override) before clamping.
    pub talent:   f64,
    /// Fixed for the run.
    pub speed:    f64,
    pub radius:   f64,
}

/// Read-only copy of one agent's score counters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentStats {
    pub collision_points: f64,
    pub luck_points:      u32,
    pub rejection_points: u32,
}

/// Structure-of-Arrays storage for all agent state.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematics ────────────────────────────────────────────────────────
    pub position: Vec<Vec2>,
    pub heading:  Vec<f64>,
    pub talent:   Vec<f64>,
    pub speed:    Vec<f64>,
    pub radius:   Vec<f64>,

    // ── Score counters (monotonically nondecreasing) ──────────────────────
    /// Grows only through scored node contacts.
    pub collision_points: Vec<f64>,
    /// Grows only through barrier passes.
    pub luck_points:      Vec<u32>,
    /// Grows only through barrier rejections.
    pub rejection_points: Vec<u32>,

    // ── Gate state ────────────────────────────────────────────────────────
    pub gates:   Vec<GateTable>,
    /// The agent's single visible barrier, if any.
    pub barrier: Vec<Option<Barrier>>,
}

impl AgentStore {
    /// An empty store with room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count:            0,
            position:         Vec::with_capacity(capacity),
            heading:          Vec::with_capacity(capacity),
            talent:           Vec::with_capacity(capacity),
            speed:            Vec::with_capacity(capacity),
            radius:           Vec::with_capacity(capacity),
            collision_points: Vec::with_capacity(capacity),
            luck_points:      Vec::with_capacity(capacity),
            rejection_points: Vec::with_capacity(capacity),
            gates:            Vec::with_capacity(capacity),
            barrier:          Vec::with_capacity(capacity),
        }
    }

    /// Append an agent with zeroed counters and no gate memory.
    pub fn push(&mut self, spawn: AgentSpawn) -> AgentId {
        let id = AgentId(self.count as u32);
        self.position.push(spawn.position);
        self.heading.push(lg_core::geo::normalize_heading(spawn.heading));
        self.talent.push(spawn.talent);
        self.speed.push(spawn.speed);
        self.radius.push(spawn.radius);
        self.collision_points.push(0.0);
        self.luck_points.push(0);
        self.rejection_points.push(0);
        self.gates.push(GateTable::new());
        self.barrier.push(None);
        self.count += 1;
        id
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    #[inline]
    pub fn stats(&self, agent: AgentId) -> AgentStats {
        let i = agent.index();
        AgentStats {
            collision_points: self.collision_points[i],
            luck_points:      self.luck_points[i],
            rejection_points: self.rejection_points[i],
        }
    }

    /// Check every agent against the construction invariants: finite
    /// position, heading and talent, positive finite speed and radius, and
    /// one entry per agent in every array.
    pub fn validate(&self) -> LgResult<()> {
        let n = self.count;
        let lengths = [
            self.position.len(),
            self.heading.len(),
            self.talent.len(),
            self.speed.len(),
            self.radius.len(),
            self.collision_points.len(),
            self.luck_points.len(),
            self.rejection_points.len(),
            self.gates.len(),
            self.barrier.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err(LgError::Config(format!(
                "agent store arrays {lengths:?} do not all match count {n}"
            )));
        }

        for id in self.agent_ids() {
            let i = id.index();
            if !self.position[i].is_finite() {
                return Err(invalid(id, "position", self.position[i]));
            }
            if !self.heading[i].is_finite() {
                return Err(invalid(id, "heading", self.heading[i]));
            }
            if !self.talent[i].is_finite() {
                return Err(invalid(id, "talent", self.talent[i]));
            }
            if !(self.speed[i].is_finite() && self.speed[i] > 0.0) {
                return Err(invalid(id, "speed", self.speed[i]));
            }
            if !(self.radius[i].is_finite() && self.radius[i] > 0.0) {
                return Err(invalid(id, "radius", self.radius[i]));
            }
        }
        Ok(())
    }
}

fn invalid(id: AgentId, what: &str, value: impl std::fmt::Debug) -> LgError {
    LgError::Config(format!("{id} has invalid {what} {value:?}"))
}
