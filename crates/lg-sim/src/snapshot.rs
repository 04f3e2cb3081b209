//! Owned, read-only views of the world for renderers.

use lg_agent::{AgentStore, Barrier, NodeSet};
use lg_core::{AgentId, NodeId, Tick, Vec2};

/// One agent as a renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:       AgentId,
    pub position: Vec2,
    pub heading:  f64,
    pub radius:   f64,
    /// The visible barrier, if any.
    pub barrier:  Option<Barrier>,
}

/// One fixed node as a renderer sees it.  Static for the whole run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeView {
    pub id:               NodeId,
    pub position:         Vec2,
    pub collision_radius: f64,
    pub approach_radius:  f64,
}

/// A copy of everything drawable at the end of one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub tick:   Tick,
    pub agents: Vec<AgentView>,
    pub nodes:  Vec<NodeView>,
}

impl Snapshot {
    pub fn capture(tick: Tick, agents: &AgentStore, nodes: &NodeSet) -> Self {
        let agents = agents
            .agent_ids()
            .map(|id| {
                let i = id.index();
                AgentView {
                    id,
                    position: agents.position[i],
                    heading:  agents.heading[i],
                    radius:   agents.radius[i],
                    barrier:  agents.barrier[i],
                }
            })
            .collect();
        let nodes = nodes
            .iter()
            .map(|n| NodeView {
                id:               n.id,
                position:         n.position,
                collision_radius: n.collision_radius,
                approach_radius:  n.approach_radius,
            })
            .collect();
        Self { tick, agents, nodes }
    }

    /// Number of agents currently showing a barrier.
    pub fn visible_barriers(&self) -> usize {
        self.agents.iter().filter(|a| a.barrier.is_some()).count()
    }
}
