//! Per-tick event counts.

use lg_core::Tick;
use lg_gate::GateOutcome;

/// What happened during one tick, summed over all agents.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick:             Tick,
    /// Agents reflected off at least one arena edge.
    pub reflections:      u32,
    pub barriers_raised:  u32,
    pub barriers_hidden:  u32,
    pub passes:           u32,
    pub rejections:       u32,
    /// Scored node contacts.
    pub contacts:         u32,
    pub points_awarded:   f64,
    /// Agent–agent pairs separated.
    pub agent_collisions: u32,
}

impl TickSummary {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }

    /// Fold one agent's gate outcome into the totals.
    pub fn record(&mut self, outcome: &GateOutcome) {
        if outcome.raised_barrier() {
            self.barriers_raised += 1;
        }
        match *outcome {
            GateOutcome::BarrierHidden => self.barriers_hidden += 1,
            GateOutcome::Passed { .. } => self.passes += 1,
            GateOutcome::Rejected { .. } => self.rejections += 1,
            GateOutcome::Scored { reward, .. } => {
                self.contacts += 1;
                self.points_awarded += reward;
            }
            GateOutcome::Idle | GateOutcome::Approaching { .. } | GateOutcome::Inside { .. } => {}
        }
    }
}
