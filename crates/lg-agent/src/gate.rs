//! Per-agent memory of node gates.

use std::collections::BTreeMap;

use lg_core::{NodeId, Vec2};

/// Resolution state of one (agent, node) pair.
///
/// A missing entry in [`GateTable`] is the third state, "no memory": the agent
/// never approached the node, or left its approach range since the last
/// resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateState {
    /// At least one barrier was failed; a fresh one is raised while in range.
    Unresolved,
    /// The barrier was passed; contact with the node now scores.
    Passed,
}

/// Mapping `NodeId → GateState` for one agent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateTable(BTreeMap<NodeId, GateState>);

impl GateTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> Option<GateState> {
        self.0.get(&node).copied()
    }

    #[inline]
    pub fn is_passed(&self, node: NodeId) -> bool {
        self.get(node) == Some(GateState::Passed)
    }

    pub fn set(&mut self, node: NodeId, state: GateState) {
        self.0.insert(node, state);
    }

    /// Keep only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(NodeId, GateState) -> bool) {
        self.0.retain(|&n, &mut s| keep(n, s));
    }

    /// Nodes currently remembered, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The visible barrier an agent must get through before scoring on `node`.
///
/// At most one per agent.  It sits on the node's approach circle, on the
/// node→agent bearing, oriented tangentially.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    pub node:        NodeId,
    /// Drawn thickness, floored at the configured minimum.  Only affects the
    /// pass probability, never contact geometry.
    pub thickness:   f64,
    pub anchor:      Vec2,
    /// Tangent heading in degrees, perpendicular to the node→anchor bearing.
    pub orientation: f64,
}
