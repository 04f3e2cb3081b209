//! Unit tests for lg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(4) > NodeId(3));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::{normalize_heading, reverse_heading};
    use crate::{Bounds, Vec2};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn towards_cardinal_directions() {
        let o = Vec2::ZERO;
        assert!(close(o.towards(Vec2::new(1.0, 0.0)), 0.0));
        assert!(close(o.towards(Vec2::new(0.0, 1.0)), 90.0));
        assert!(close(o.towards(Vec2::new(-1.0, 0.0)), 180.0));
        assert!(close(o.towards(Vec2::new(0.0, -1.0)), 270.0));
    }

    #[test]
    fn towards_coincident_is_zero_not_nan() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(p.towards(p), 0.0);
    }

    #[test]
    fn offset_follows_heading() {
        let p = Vec2::new(1.0, 1.0).offset(90.0, 5.0);
        assert!(close(p.x, 1.0));
        assert!(close(p.y, 6.0));
    }

    #[test]
    fn distance_is_euclidean() {
        assert!(close(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0));
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert!(close(normalize_heading(370.0), 10.0));
        assert!(close(normalize_heading(-90.0), 270.0));
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(f64::NAN), 0.0);
        let tiny = normalize_heading(-1e-18);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn reverse_adds_half_turn() {
        assert!(close(reverse_heading(30.0), 210.0));
        assert!(close(reverse_heading(270.0), 90.0));
    }

    #[test]
    fn bounds_contains_and_inset() {
        let b = Bounds::new(10.0, 5.0);
        assert!(b.contains(Vec2::new(10.0, -5.0)));
        assert!(!b.contains(Vec2::new(10.1, 0.0)));
        let inner = b.inset(2.0);
        assert_eq!(inner, Bounds::new(8.0, 3.0));
        assert_eq!(b.inset(100.0), Bounds::new(0.0, 0.0));
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{RunBudget, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn tick_budget() {
        let b = RunBudget::Ticks(3);
        assert!(!b.is_exhausted(2, Duration::from_secs(1_000)));
        assert!(b.is_exhausted(3, Duration::ZERO));
    }

    #[test]
    fn wall_clock_budget() {
        let b = RunBudget::WallClockSecs(1.5);
        assert!(!b.is_exhausted(1_000_000, Duration::from_millis(1_499)));
        assert!(b.is_exhausted(0, Duration::from_millis(1_500)));
    }
}

#[cfg(test)]
mod config {
    use crate::{LgError, RewardTier, RunBudget, SimConfig, TalentOverride};

    fn assert_config_err(cfg: &SimConfig) {
        match cfg.validate() {
            Err(LgError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn default_matches_classic_run() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.agent_count, 10);
        assert_eq!(cfg.node_positions().count(), 5);
        assert_eq!(cfg.luck_pass_factor, 0.75);
        assert_eq!(cfg.budget, RunBudget::WallClockSecs(40.0));
    }

    #[test]
    fn rejects_pass_factor_outside_open_interval() {
        for f in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let cfg = SimConfig { luck_pass_factor: f, ..SimConfig::default() };
            assert_config_err(&cfg);
        }
    }

    #[test]
    fn rejects_non_positive_radii() {
        assert_config_err(&SimConfig { agent_radius: 0.0, ..SimConfig::default() });
        assert_config_err(&SimConfig { node_radius: -1.0, ..SimConfig::default() });
        assert_config_err(&SimConfig { approach_radius: f64::INFINITY, ..SimConfig::default() });
    }

    #[test]
    fn rejects_approach_smaller_than_collision_radius() {
        let cfg = SimConfig { approach_radius: 4.0, node_radius: 5.0, ..SimConfig::default() };
        assert_config_err(&cfg);
    }

    #[test]
    fn rejects_too_many_nodes() {
        let cfg = SimConfig { node_count: 6, ..SimConfig::default() };
        assert_config_err(&cfg);
    }

    #[test]
    fn rejects_out_of_range_override() {
        let cfg = SimConfig {
            agent_count: 2,
            talent_overrides: vec![TalentOverride { agent: 2, talent: 1.0 }],
            ..SimConfig::default()
        };
        assert_config_err(&cfg);
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let cfg = SimConfig { speed_min: 5.0, speed_max: 1.0, ..SimConfig::default() };
        assert_config_err(&cfg);
    }

    #[test]
    fn rejects_empty_budgets() {
        assert_config_err(&SimConfig { budget: RunBudget::Ticks(0), ..SimConfig::default() });
        assert_config_err(&SimConfig {
            budget: RunBudget::WallClockSecs(0.0),
            ..SimConfig::default()
        });
    }

    #[test]
    fn zero_agents_is_allowed() {
        SimConfig { agent_count: 0, ..SimConfig::default() }.validate().unwrap();
    }

    #[test]
    fn reward_lookup_picks_highest_reached_tier() {
        let tiers = RewardTier::classic();
        assert_eq!(RewardTier::lookup(&tiers, 0), 1.0);
        assert_eq!(RewardTier::lookup(&tiers, 4), 1.0);
        assert_eq!(RewardTier::lookup(&tiers, 5), 1.5);
        assert_eq!(RewardTier::lookup(&tiers, 12), 2.0);
        assert_eq!(RewardTier::lookup(&tiers, 40), 3.0);
        assert_eq!(RewardTier::lookup(&[], 40), 1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
            assert_eq!(r1.normal(10.0, 3.0), r2.normal(10.0, 3.0));
        }
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn uniform_range_in_bounds() {
        let mut rng = SimRng::new(1);
        for _ in 0..1000 {
            let v = rng.uniform_range(-380.0, 380.0);
            assert!((-380.0..380.0).contains(&v));
        }
        assert_eq!(rng.uniform_range(2.0, 2.0), 2.0);
    }

    #[test]
    fn zero_std_dev_returns_mean() {
        let mut rng = SimRng::new(7);
        assert_eq!(rng.normal(10.0, 0.0), 10.0);
    }

    #[test]
    fn normal_sample_mean_is_close() {
        let mut rng = SimRng::new(99);
        let n = 20_000;
        let mean = (0..n).map(|_| rng.normal(3.0, 1.0)).sum::<f64>() / n as f64;
        assert!((mean - 3.0).abs() < 0.05, "got {mean}");
    }
}
