//! Unit tests for lg-agent.

#[cfg(test)]
mod gate_table {
    use lg_core::NodeId;

    use crate::{GateState, GateTable};

    #[test]
    fn absent_means_no_memory() {
        let t = GateTable::new();
        assert_eq!(t.get(NodeId(0)), None);
        assert!(!t.is_passed(NodeId(0)));
        assert!(t.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let mut t = GateTable::new();
        t.set(NodeId(2), GateState::Unresolved);
        t.set(NodeId(2), GateState::Passed);
        assert!(t.is_passed(NodeId(2)));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn retain_prunes_selected_nodes() {
        let mut t = GateTable::new();
        t.set(NodeId(0), GateState::Passed);
        t.set(NodeId(1), GateState::Unresolved);
        t.set(NodeId(3), GateState::Passed);
        t.retain(|n, _| n != NodeId(1));
        assert_eq!(t.nodes().collect::<Vec<_>>(), vec![NodeId(0), NodeId(3)]);
        assert_eq!(t.len(), 2);
    }
}

#[cfg(test)]
mod nodes {
    use lg_core::{LgError, NodeId, SimConfig, Vec2};

    use crate::{FixedNode, NodeSet};

    #[test]
    fn from_config_takes_first_node_count_placements() {
        let config = SimConfig { node_count: 3, ..SimConfig::default() };
        let set = NodeSet::from_config(&config).unwrap();
        assert_eq!(set.len(), 3);
        let ids: Vec<_> = set.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(set.get(NodeId(1)).unwrap().position, Vec2::new(200.0, 150.0));
        assert!(set.get(NodeId(3)).is_none());
    }

    #[test]
    fn approach_radius_must_cover_collision_radius() {
        let err = FixedNode::new(NodeId(0), Vec2::ZERO, 10.0, 9.0).unwrap_err();
        assert!(matches!(err, LgError::Config(_)));
    }

    #[test]
    fn rejects_non_positive_collision_radius() {
        assert!(FixedNode::new(NodeId(0), Vec2::ZERO, 0.0, 9.0).is_err());
    }

    #[test]
    fn approach_range_is_strict() {
        let n = FixedNode::new(NodeId(0), Vec2::ZERO, 5.0, 40.0).unwrap();
        assert!(n.in_approach_range(Vec2::new(39.9, 0.0)));
        assert!(!n.in_approach_range(Vec2::new(40.0, 0.0)));
    }
}

#[cfg(test)]
mod store {
    use lg_core::{AgentId, LgError, Vec2};

    use crate::{AgentSpawn, AgentStore};

    fn spawn(x: f64, heading: f64) -> AgentSpawn {
        AgentSpawn { position: Vec2::new(x, 0.0), heading, talent: 3.0, speed: 3.0, radius: 5.0 }
    }

    #[test]
    fn push_assigns_sequential_ids_and_zero_counters() {
        let mut s = AgentStore::default();
        assert_eq!(s.push(spawn(0.0, 0.0)), AgentId(0));
        assert_eq!(s.push(spawn(1.0, 0.0)), AgentId(1));
        assert_eq!(s.count, 2);
        let stats = s.stats(AgentId(1));
        assert_eq!(stats.collision_points, 0.0);
        assert_eq!(stats.luck_points, 0);
        assert_eq!(stats.rejection_points, 0);
        assert!(s.gates[1].is_empty());
        assert!(s.barrier[1].is_none());
    }

    #[test]
    fn push_normalizes_heading() {
        let mut s = AgentStore::default();
        s.push(spawn(0.0, -90.0));
        assert_eq!(s.heading[0], 270.0);
    }

    #[test]
    fn agent_ids_ascending() {
        let mut s = AgentStore::with_capacity(3);
        for i in 0..3 {
            s.push(spawn(i as f64, 0.0));
        }
        let ids: Vec<_> = s.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
        assert!(s.contains(AgentId(2)));
        assert!(!s.contains(AgentId(3)));
    }

    #[test]
    fn validate_accepts_well_formed_agents() {
        let mut s = AgentStore::default();
        s.push(spawn(0.0, 0.0));
        s.push(spawn(10.0, 45.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_speed_and_radius() {
        let mut s = AgentStore::default();
        s.push(AgentSpawn { speed: -1.0, ..spawn(0.0, 0.0) });
        assert!(matches!(s.validate(), Err(LgError::Config(_))));

        let mut s = AgentStore::default();
        s.push(AgentSpawn { speed: 0.0, ..spawn(0.0, 0.0) });
        assert!(s.validate().is_err());

        let mut s = AgentStore::default();
        s.push(AgentSpawn { radius: -5.0, ..spawn(0.0, 0.0) });
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_state() {
        let mut s = AgentStore::default();
        s.push(AgentSpawn { position: Vec2::new(f64::NAN, 0.0), ..spawn(0.0, 0.0) });
        assert!(s.validate().is_err());

        let mut s = AgentStore::default();
        s.push(spawn(0.0, 0.0));
        s.heading[0] = f64::INFINITY;
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_ragged_arrays() {
        let mut s = AgentStore::default();
        s.push(spawn(0.0, 0.0));
        s.speed.push(1.0);
        assert!(s.validate().is_err());
    }
}

#[cfg(test)]
mod builder {
    use lg_core::{Bounds, LgError, RandomSource, SimConfig, SimRng, TalentOverride};

    use crate::AgentStoreBuilder;

    /// Returns the same value for every uniform draw and `mean + offset`
    /// for every normal draw, counting calls.
    struct Fixed {
        uniform: f64,
        offset:  f64,
        draws:   usize,
    }

    impl RandomSource for Fixed {
        fn uniform(&mut self) -> f64 {
            self.draws += 1;
            self.uniform
        }
        fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
            self.draws += 1;
            mean + self.offset
        }
    }

    #[test]
    fn build_count_and_radius() {
        let mut rng = SimRng::new(42);
        let store = AgentStoreBuilder::new(25).radius(5.0).build(&mut rng).unwrap();
        assert_eq!(store.count, 25);
        assert_eq!(store.position.len(), 25);
        assert!(store.radius.iter().all(|&r| r == 5.0));
    }

    #[test]
    fn spawn_inside_area_with_valid_headings() {
        let mut rng = SimRng::new(3);
        let area = Bounds::new(380.0, 280.0);
        let store = AgentStoreBuilder::new(200).spawn_area(area).build(&mut rng).unwrap();
        assert!(store.position.iter().all(|&p| area.contains(p)));
        assert!(store.heading.iter().all(|h| (0.0..360.0).contains(h)));
    }

    #[test]
    fn speed_is_clamped_talent() {
        let mut low = Fixed { uniform: 0.5, offset: -10.0, draws: 0 };
        let store = AgentStoreBuilder::new(1).speed_range(0.5, 20.0).build(&mut low).unwrap();
        assert_eq!(store.talent[0], -7.0);
        assert_eq!(store.speed[0], 0.5);

        let mut high = Fixed { uniform: 0.5, offset: 100.0, draws: 0 };
        let store = AgentStoreBuilder::new(1).speed_range(0.5, 20.0).build(&mut high).unwrap();
        assert_eq!(store.speed[0], 20.0);
    }

    #[test]
    fn four_draws_per_agent_even_with_override() {
        let mut rng = Fixed { uniform: 0.25, offset: 0.0, draws: 0 };
        let overrides = [TalentOverride { agent: 1, talent: 9.0 }];
        let store = AgentStoreBuilder::new(3).talent_overrides(&overrides).build(&mut rng).unwrap();
        assert_eq!(rng.draws, 12);
        assert_eq!(store.talent, vec![3.0, 9.0, 3.0]);
        assert_eq!(store.speed[1], 9.0);
    }

    #[test]
    fn override_does_not_shift_other_agents() {
        let plain = AgentStoreBuilder::new(4).build(&mut SimRng::new(11)).unwrap();
        let overridden = AgentStoreBuilder::new(4)
            .talent_overrides(&[TalentOverride { agent: 0, talent: 0.1 }])
            .build(&mut SimRng::new(11)).unwrap();
        assert_eq!(overridden.talent[0], 0.1);
        assert_eq!(plain.talent[1..], overridden.talent[1..]);
        assert_eq!(plain.position, overridden.position);
    }

    #[test]
    fn from_config_uses_inset_arena() {
        let config = SimConfig { agent_count: 50, ..SimConfig::default() };
        let store = AgentStoreBuilder::from_config(&config).build(&mut SimRng::new(5)).unwrap();
        let area = config.bounds().inset(config.spawn_margin);
        assert_eq!(store.count, 50);
        assert!(store.position.iter().all(|&p| area.contains(p)));
        assert!(store.radius.iter().all(|&r| r == config.agent_radius));
    }

    #[test]
    fn same_seed_same_population() {
        let config = SimConfig::default();
        let a = AgentStoreBuilder::from_config(&config).build(&mut SimRng::new(8)).unwrap();
        let b = AgentStoreBuilder::from_config(&config).build(&mut SimRng::new(8)).unwrap();
        assert_eq!(a.position, b.position);
        assert_eq!(a.talent, b.talent);
    }

    #[test]
    fn inverted_speed_range_is_an_error() {
        let mut rng = Fixed { uniform: 0.5, offset: 0.0, draws: 0 };
        let result = AgentStoreBuilder::new(2).speed_range(5.0, 1.0).build(&mut rng);
        assert!(matches!(result, Err(LgError::Config(_))));
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn nan_speed_bound_is_an_error() {
        let mut rng = SimRng::new(1);
        assert!(AgentStoreBuilder::new(2).speed_range(f64::NAN, 1.0).build(&mut rng).is_err());
        assert!(AgentStoreBuilder::new(2).speed_range(0.5, f64::NAN).build(&mut rng).is_err());
    }

    #[test]
    fn bad_radius_or_talent_spread_is_an_error() {
        let mut rng = SimRng::new(1);
        assert!(AgentStoreBuilder::new(1).radius(0.0).build(&mut rng).is_err());
        assert!(AgentStoreBuilder::new(1).talent(3.0, -1.0).build(&mut rng).is_err());
    }

    #[test]
    fn non_finite_override_is_an_error() {
        let mut rng = SimRng::new(1);
        let overrides = [TalentOverride { agent: 0, talent: f64::NAN }];
        let result = AgentStoreBuilder::new(1).talent_overrides(&overrides).build(&mut rng);
        assert!(result.is_err());
    }
}
