//! Fixed nodes: immobile points of value guarded by a barrier.

use lg_core::{LgError, LgResult, NodeId, SimConfig, Vec2};

/// An immobile node.  Immutable after construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedNode {
    pub id:               NodeId,
    pub position:         Vec2,
    pub collision_radius: f64,
    /// Always `>= collision_radius`.
    pub approach_radius:  f64,
}

impl FixedNode {
    pub fn new(
        id:               NodeId,
        position:         Vec2,
        collision_radius: f64,
        approach_radius:  f64,
    ) -> LgResult<Self> {
        if !position.is_finite() {
            return Err(LgError::Config(format!("{id} position {position:?} is not finite")));
        }
        if !(collision_radius.is_finite() && collision_radius > 0.0) {
            return Err(LgError::Config(format!(
                "{id} collision radius must be positive, got {collision_radius}"
            )));
        }
        if !(approach_radius.is_finite() && approach_radius >= collision_radius) {
            return Err(LgError::Config(format!(
                "{id} approach radius {approach_radius} must be >= collision radius {collision_radius}"
            )));
        }
        Ok(Self { id, position, collision_radius, approach_radius })
    }

    /// `true` if `p` is strictly inside the approach circle.
    #[inline]
    pub fn in_approach_range(&self, p: Vec2) -> bool {
        self.position.distance(p) < self.approach_radius
    }
}

/// All fixed nodes, in canonical (construction) order.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
    nodes: Vec<FixedNode>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the first `node_count` placements from `config`.
    pub fn from_config(config: &SimConfig) -> LgResult<Self> {
        let mut set = NodeSet::new();
        for p in config.node_positions() {
            set.push(p, config.node_radius, config.approach_radius)?;
        }
        Ok(set)
    }

    /// Append a node; its id is its position in canonical order.
    pub fn push(
        &mut self,
        position:         Vec2,
        collision_radius: f64,
        approach_radius:  f64,
    ) -> LgResult<NodeId> {
        let id = NodeId::try_from(self.nodes.len())
            .map_err(|_| LgError::Config("too many nodes".into()))?;
        self.nodes.push(FixedNode::new(id, position, collision_radius, approach_radius)?);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&FixedNode> {
        self.nodes.get(id.index())
    }

    /// Canonical-order iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, FixedNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a FixedNode;
    type IntoIter = std::slice::Iter<'a, FixedNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
