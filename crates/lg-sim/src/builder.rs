//! Fluent builder for constructing a [`Sim`].

use lg_agent::{AgentStore, AgentStoreBuilder, NodeSet};
use lg_core::{RandomSource, SimConfig, Tick};
use lg_gate::{GateEngine, GateParams};
use tracing::warn;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — counts, radii, distributions, budget, …
/// - `R: RandomSource` — the run's single random source (e.g. [`lg_core::SimRng`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                              |
/// |-----------------|------------------------------------------------------|
/// | `.agents(s)`    | Drawn from `rng` via `AgentStoreBuilder::from_config` |
/// | `.nodes(n)`     | `NodeSet::from_config`                               |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, SimRng::new(42)).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: RandomSource> {
    config: SimConfig,
    rng:    R,
    agents: Option<AgentStore>,
    nodes:  Option<NodeSet>,
}

impl<R: RandomSource> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self { config, rng, agents: None, nodes: None }
    }

    /// Supply a pre-built population (must hold `config.agent_count` agents,
    /// each passing [`AgentStore::validate`]).
    ///
    /// No construction draws are taken from the random source in this case.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Supply the fixed nodes directly instead of the config placement list.
    pub fn nodes(mut self, nodes: NodeSet) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Validate the config, construct the population, and return a
    /// ready-to-run [`Sim`].  Fails before any tick runs.
    pub fn build(self) -> SimResult<Sim<R>> {
        let Self { config, mut rng, agents, nodes } = self;

        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected simulation config");
            return Err(e.into());
        }

        let gate = GateEngine::new(GateParams::from_config(&config)?)?;

        let nodes = match nodes {
            Some(n) => n,
            None => NodeSet::from_config(&config)?,
        };

        let agents = match agents {
            Some(a) => {
                if a.count != config.agent_count {
                    return Err(SimError::CountMismatch {
                        expected: config.agent_count,
                        got:      a.count,
                        what:     "agent store",
                    });
                }
                if let Err(e) = a.validate() {
                    warn!(error = %e, "rejected supplied agents");
                    return Err(e.into());
                }
                a
            }
            None => AgentStoreBuilder::from_config(&config).build(&mut rng)?,
        };

        Ok(Sim {
            config,
            tick: Tick::ZERO,
            agents,
            nodes,
            gate,
            rng,
        })
    }
}
