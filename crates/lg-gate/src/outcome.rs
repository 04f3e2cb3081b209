//! What happened to one agent in one gate step.

use lg_core::NodeId;

/// Result of [`GateEngine::step`][crate::GateEngine::step] for one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GateOutcome {
    /// No node in approach range and no barrier to hide.
    Idle,

    /// No node in approach range; the visible barrier was discarded.
    BarrierHidden,

    /// In range of a node not yet passed, but not touching its barrier.
    /// `raised` is `true` if the barrier was generated this step.
    Approaching { node: NodeId, raised: bool },

    /// The barrier was resolved and passed.
    Passed { node: NodeId, prob_pass: f64, raised: bool },

    /// The barrier was resolved and the agent bounced off it.
    Rejected { node: NodeId, prob_pass: f64, raised: bool },

    /// Inside the range of a passed node without touching it.
    Inside { node: NodeId },

    /// Touched a passed node and scored `reward` collision points.
    Scored { node: NodeId, reward: f64 },
}

impl GateOutcome {
    /// The node interacted with this step, if any.
    pub fn node(&self) -> Option<NodeId> {
        match *self {
            GateOutcome::Idle | GateOutcome::BarrierHidden => None,
            GateOutcome::Approaching { node, .. }
            | GateOutcome::Passed { node, .. }
            | GateOutcome::Rejected { node, .. }
            | GateOutcome::Inside { node }
            | GateOutcome::Scored { node, .. } => Some(node),
        }
    }

    /// `true` if a new barrier was generated this step.
    pub fn raised_barrier(&self) -> bool {
        matches!(
            *self,
            GateOutcome::Approaching { raised: true, .. }
                | GateOutcome::Passed { raised: true, .. }
                | GateOutcome::Rejected { raised: true, .. }
        )
    }
}
