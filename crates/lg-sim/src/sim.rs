//! The `Sim` struct and its tick loop.

use std::time::{Duration, Instant};

use lg_agent::{AgentStore, NodeSet};
use lg_core::{AgentId, RandomSource, SimConfig, Tick};
use lg_gate::GateEngine;
use lg_physics::{move_agent, resolve_agent_pair};
use tracing::{debug, info};

use crate::{NoopObserver, SimObserver, SimResult, TickSummary};

/// How a call to [`Sim::run`] ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunStats {
    /// Ticks executed by this call.
    pub ticks:   u64,
    pub elapsed: Duration,
}

/// The main simulation runner.
///
/// `Sim<R>` holds all simulation state.  Nothing outside it writes to agents
/// or nodes; observers only ever get shared references.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource> {
    /// Run configuration, fixed for the whole run.
    pub config: SimConfig,

    /// The next tick to execute.
    pub tick: Tick,

    /// All agent state (SoA arrays), indexed by `AgentId`.
    pub agents: AgentStore,

    /// Fixed nodes in canonical order.
    pub nodes: NodeSet,

    /// Barrier state machine parameters.
    pub gate: GateEngine,

    /// The run's single random source.
    pub rng: R,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.budget` is spent.
    ///
    /// The budget is checked between ticks only; a tick in progress always
    /// completes.  Calls observer hooks at every tick boundary.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunStats> {
        let budget = self.config.budget;
        let first = self.tick;
        let started = Instant::now();

        info!(
            agents = self.agents.count,
            nodes = self.nodes.len(),
            %budget,
            "simulation started",
        );
        observer.on_sim_start(&self.agents, &self.nodes);

        while !budget.is_exhausted(self.tick.since(first), started.elapsed()) {
            self.run_one(observer)?;
        }
        observer.on_sim_end(self.tick);

        let stats = RunStats { ticks: self.tick.since(first), elapsed: started.elapsed() };
        info!(ticks = stats.ticks, elapsed_s = stats.elapsed.as_secs_f64(), "simulation finished");
        Ok(stats)
    }

    /// Run exactly `n` ticks from the current position (ignores the budget).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.run_one(observer)?;
        }
        Ok(())
    }

    /// Execute one tick and advance the clock, without observer callbacks.
    pub fn step(&mut self) -> SimResult<TickSummary> {
        let summary = self.process_tick(self.tick, &mut NoopObserver)?;
        self.tick = self.tick.next();
        Ok(summary)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn run_one<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(&summary);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents, &self.nodes);
        }

        self.tick = now.next();
        Ok(())
    }

    fn process_tick<O: SimObserver>(
        &mut self,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<TickSummary> {
        let bounds = self.config.bounds();
        let count = self.agents.count;
        let mut summary = TickSummary::new(now);

        for i in 0..count {
            let agent = AgentId(i as u32);

            // ── ① + ② move and reflect ────────────────────────────────────
            if move_agent(&mut self.agents, agent, bounds).any() {
                summary.reflections += 1;
            }

            // ── ③ node interaction ────────────────────────────────────────
            let outcome = self.gate.step(&mut self.agents, agent, &self.nodes, &mut self.rng)?;
            summary.record(&outcome);
            observer.on_gate_outcome(now, agent, &outcome);

            // ── ④ pairwise collisions, each unordered pair once ──────────
            for j in i + 1..count {
                if resolve_agent_pair(&mut self.agents, agent, AgentId(j as u32)) {
                    summary.agent_collisions += 1;
                }
            }
        }

        debug!(
            tick = now.0,
            passes = summary.passes,
            rejections = summary.rejections,
            contacts = summary.contacts,
            "tick processed",
        );
        Ok(summary)
    }
}
