//! Ranking agents into the final report.

use lg_agent::AgentStore;
use lg_core::AgentId;

/// One agent's line in the final ranking.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Standing {
    /// 1-based position in the ranking.
    pub rank:             usize,
    pub agent:            AgentId,
    pub talent:           f64,
    pub speed:            f64,
    pub luck_points:      u32,
    pub rejection_points: u32,
    pub collision_points: f64,
}

/// The ranked result of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct FinalReport {
    /// Ticks executed before the budget ran out.
    pub ticks:     u64,
    pub standings: Vec<Standing>,
}

impl FinalReport {
    pub fn new(ticks: u64, agents: &AgentStore) -> Self {
        Self { ticks, standings: rank(agents) }
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    /// The first `n` standings (fewer if the report is shorter).
    pub fn top(&self, n: usize) -> &[Standing] {
        &self.standings[..n.min(self.len())]
    }

    /// The last `n` standings (fewer if the report is shorter).
    pub fn bottom(&self, n: usize) -> &[Standing] {
        &self.standings[self.len().saturating_sub(n)..]
    }
}

/// Rank every agent by `collision_points`, highest first.
///
/// The sort is stable: agents with equal points keep ascending `AgentId`
/// order.
pub fn rank(agents: &AgentStore) -> Vec<Standing> {
    let mut order: Vec<AgentId> = agents.agent_ids().collect();
    order.sort_by(|a, b| {
        agents.collision_points[b.index()].total_cmp(&agents.collision_points[a.index()])
    });

    order
        .into_iter()
        .enumerate()
        .map(|(pos, agent)| {
            let i = agent.index();
            Standing {
                rank:             pos + 1,
                agent,
                talent:           agents.talent[i],
                speed:            agents.speed[i],
                luck_points:      agents.luck_points[i],
                rejection_points: agents.rejection_points[i],
                collision_points: agents.collision_points[i],
            }
        })
        .collect()
}
