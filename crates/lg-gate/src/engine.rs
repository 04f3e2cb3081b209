//! The gate engine: node selection, barrier generation, pass/fail, scoring.

use lg_agent::{AgentStore, Barrier, FixedNode, GateState, NodeSet};
use lg_core::geo::{normalize_heading, reverse_heading};
use lg_core::{AgentId, RandomSource};
use lg_physics::{Body, push_out_of_node};
use tracing::trace;

use crate::{GateError, GateOutcome, GateParams, GateResult, pass_probability};

/// Runs the barrier state machine for one agent per call.
///
/// The engine holds only immutable parameters; all per-pair state lives in
/// the agent's [`GateTable`][lg_agent::GateTable] and barrier slot.
#[derive(Clone, Debug)]
pub struct GateEngine {
    params: GateParams,
}

impl GateEngine {
    pub fn new(params: GateParams) -> GateResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &GateParams {
        &self.params
    }

    /// One gate step for `agent`, after it has moved this tick.
    ///
    /// 1. Forget every remembered node the agent is no longer in range of.
    /// 2. Pick the first node in canonical order whose approach circle
    ///    contains the agent.  At most one node is processed per step.
    /// 3. No candidate: hide the barrier and stop.
    /// 4. Candidate passed: score on contact.
    /// 5. Otherwise: raise a barrier if needed and resolve it on contact.
    ///
    /// Draws from `rng` only when a barrier is raised (thickness) or
    /// resolved (pass/fail), in that order.
    pub fn step<R: RandomSource>(
        &self,
        store: &mut AgentStore,
        agent: AgentId,
        nodes: &NodeSet,
        rng:   &mut R,
    ) -> GateResult<GateOutcome> {
        if !store.contains(agent) {
            return Err(GateError::UnknownAgent(agent));
        }
        let i = agent.index();

        self.prune(store, agent, nodes);

        let position = store.position[i];
        let Some(node) = nodes.iter().find(|n| n.in_approach_range(position)) else {
            return Ok(match store.barrier[i].take() {
                Some(_) => GateOutcome::BarrierHidden,
                None => GateOutcome::Idle,
            });
        };

        // A barrier belonging to any other node is stale now.
        if store.barrier[i].is_some_and(|b| b.node != node.id) {
            store.barrier[i] = None;
        }

        if store.gates[i].is_passed(node.id) {
            Ok(self.contact(store, agent, node))
        } else {
            Ok(self.barrier(store, agent, node, rng))
        }
    }

    /// Drop gate memory for nodes whose approach range the agent has left.
    fn prune(&self, store: &mut AgentStore, agent: AgentId, nodes: &NodeSet) {
        let i = agent.index();
        let position = store.position[i];
        store.gates[i].retain(|node, _| {
            nodes.get(node).is_some_and(|n| n.in_approach_range(position))
        });
    }

    /// Passed node: score if the agent actually touches it.
    fn contact(&self, store: &mut AgentStore, agent: AgentId, node: &FixedNode) -> GateOutcome {
        let i = agent.index();
        let mut body = Body::of(store, agent);
        if !push_out_of_node(&mut body, node) {
            return GateOutcome::Inside { node: node.id };
        }
        body.store_into(store, agent);

        let reward = self.params.contact_reward(store.luck_points[i]);
        store.collision_points[i] += reward;
        trace!(%agent, node = %node.id, reward, total = store.collision_points[i], "scored contact");
        GateOutcome::Scored { node: node.id, reward }
    }

    /// Unpassed node: raise the barrier if none is visible, then resolve it
    /// if the agent touches it.
    fn barrier<R: RandomSource>(
        &self,
        store: &mut AgentStore,
        agent: AgentId,
        node:  &FixedNode,
        rng:   &mut R,
    ) -> GateOutcome {
        let i = agent.index();

        let raised = store.barrier[i].is_none();
        let barrier = match store.barrier[i] {
            Some(b) => b,
            None => {
                let b = self.raise(store, agent, node, rng);
                store.barrier[i] = Some(b);
                if store.gates[i].get(node.id).is_none() {
                    store.gates[i].set(node.id, GateState::Unresolved);
                }
                b
            }
        };

        let contact_distance = store.radius[i] + self.params.barrier_half_width;
        if store.position[i].distance(barrier.anchor) >= contact_distance {
            return GateOutcome::Approaching { node: node.id, raised };
        }

        let speed = store.speed[i];
        let prob_pass = pass_probability(speed, barrier.thickness, self.params.luck_pass_factor);
        let draw = rng.uniform();
        store.barrier[i] = None;

        if draw < prob_pass {
            store.luck_points[i] += 1;
            store.gates[i].set(node.id, GateState::Passed);
            trace!(%agent, node = %node.id, thickness = barrier.thickness, prob_pass, draw, "barrier passed");
            GateOutcome::Passed { node: node.id, prob_pass, raised }
        } else {
            store.rejection_points[i] += 1;
            store.heading[i] = reverse_heading(store.heading[i]);
            store.gates[i].set(node.id, GateState::Unresolved);
            trace!(%agent, node = %node.id, thickness = barrier.thickness, prob_pass, draw, "barrier rejected");
            GateOutcome::Rejected { node: node.id, prob_pass, raised }
        }
    }

    /// Generate a barrier on `node`'s approach circle, facing `agent`.
    fn raise<R: RandomSource>(
        &self,
        store: &AgentStore,
        agent: AgentId,
        node:  &FixedNode,
        rng:   &mut R,
    ) -> Barrier {
        let thickness = rng
            .normal(self.params.wall_thickness_mean, self.params.wall_thickness_std_dev)
            .max(self.params.min_wall_thickness);
        let bearing = node.position.towards(store.position[agent.index()]);
        Barrier {
            node: node.id,
            thickness,
            anchor: node.position.offset(bearing, node.approach_radius),
            orientation: normalize_heading(bearing + 90.0),
        }
    }
}
