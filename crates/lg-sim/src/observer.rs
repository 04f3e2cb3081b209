//! Simulation observer trait — the renderer / progress seam.

use lg_agent::{AgentStore, NodeSet};
use lg_core::{AgentId, Tick};
use lg_gate::GateOutcome;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.  Observers get shared references only and can never write back
/// into the simulation.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} passes", summary.tick, summary.passes);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick with the initial world.
    fn on_sim_start(&mut self, _agents: &AgentStore, _nodes: &NodeSet) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent per tick, right after its node interaction and
    /// before its pairwise collisions.
    fn on_gate_outcome(&mut self, _tick: Tick, _agent: AgentId, _outcome: &GateOutcome) {}

    /// Called at the end of each tick with that tick's event counts.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called after the tick's update, every `config.snapshot_interval_ticks`
    /// ticks.  This is where a renderer draws; use
    /// [`Snapshot::capture`][crate::Snapshot::capture] for an owned copy.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _nodes: &NodeSet) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
