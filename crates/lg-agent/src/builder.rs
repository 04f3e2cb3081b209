//! Fluent builder for constructing the initial `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use lg_agent::AgentStoreBuilder;
//! use lg_core::{SimConfig, SimRng};
//!
//! let config = SimConfig::default();
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::from_config(&config).build(&mut rng)?;
//!
//! assert_eq!(store.count, 10);
//! # Ok::<(), lg_core::LgError>(())
//! ```
//!
//! # Draw order
//!
//! For each agent in index order: x, y, heading, talent.  The talent draw is
//! consumed even for agents with an override, so overriding one agent never
//! changes any other agent's draws.

use std::collections::BTreeMap;

use lg_core::{Bounds, LgError, LgResult, RandomSource, SimConfig, TalentOverride};

use crate::{AgentSpawn, AgentStore};

/// Fluent builder for [`AgentStore`].
pub struct AgentStoreBuilder {
    count:          usize,
    radius:         f64,
    spawn_area:     Bounds,
    talent_mean:    f64,
    talent_std_dev: f64,
    speed_min:      f64,
    speed_max:      f64,
    overrides:      BTreeMap<u32, f64>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents with unit radius, a 100×100 spawn
    /// area, and talent `N(3, 1)` clamped to `[0.5, 20]`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            radius:         1.0,
            spawn_area:     Bounds::new(50.0, 50.0),
            talent_mean:    3.0,
            talent_std_dev: 1.0,
            speed_min:      0.5,
            speed_max:      20.0,
            overrides:      BTreeMap::new(),
        }
    }

    /// Builder pre-filled from a (validated) config.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.agent_count)
            .radius(config.agent_radius)
            .spawn_area(config.bounds().inset(config.spawn_margin))
            .talent(config.talent_mean, config.talent_std_dev)
            .speed_range(config.speed_min, config.speed_max)
            .talent_overrides(&config.talent_overrides)
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Agents spawn uniformly inside `area`.
    pub fn spawn_area(mut self, area: Bounds) -> Self {
        self.spawn_area = area;
        self
    }

    pub fn talent(mut self, mean: f64, std_dev: f64) -> Self {
        self.talent_mean = mean;
        self.talent_std_dev = std_dev;
        self
    }

    pub fn speed_range(mut self, min: f64, max: f64) -> Self {
        self.speed_min = min;
        self.speed_max = max;
        self
    }

    /// Replace the drawn talent of specific agents.  Later entries for the
    /// same agent win.
    pub fn talent_overrides(mut self, overrides: &[TalentOverride]) -> Self {
        for o in overrides {
            self.overrides.insert(o.agent, o.talent);
        }
        self
    }

    /// Draw every agent's initial state from `rng`.
    ///
    /// Fails without drawing if the builder's parameters are unusable, and
    /// after drawing if an override produced an invalid agent.
    pub fn build<R: RandomSource>(self, rng: &mut R) -> LgResult<AgentStore> {
        self.check()?;
        let mut store = AgentStore::with_capacity(self.count);
        let (hw, hh) = (self.spawn_area.half_width, self.spawn_area.half_height);

        for i in 0..self.count {
            let x = rng.uniform_range(-hw, hw);
            let y = rng.uniform_range(-hh, hh);
            let heading = rng.uniform_range(0.0, 360.0);
            let drawn = rng.normal(self.talent_mean, self.talent_std_dev);

            let talent = self.overrides.get(&(i as u32)).copied().unwrap_or(drawn);
            let speed = talent.clamp(self.speed_min, self.speed_max);

            store.push(AgentSpawn {
                position: lg_core::Vec2::new(x, y),
                heading,
                talent,
                speed,
                radius: self.radius,
            });
        }
        store.validate()?;
        Ok(store)
    }

    fn check(&self) -> LgResult<()> {
        let (lo, hi) = (self.speed_min, self.speed_max);
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            return Err(LgError::Config(format!(
                "speed range [{lo}, {hi}] must be positive, finite and ordered"
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(LgError::Config(format!("agent radius must be positive, got {}", self.radius)));
        }
        if !(self.talent_mean.is_finite()
            && self.talent_std_dev.is_finite()
            && self.talent_std_dev >= 0.0)
        {
            return Err(LgError::Config(format!(
                "talent distribution N({}, {}) is invalid",
                self.talent_mean, self.talent_std_dev
            )));
        }
        let area = self.spawn_area;
        if !(area.half_width.is_finite()
            && area.half_height.is_finite()
            && area.half_width >= 0.0
            && area.half_height >= 0.0)
        {
            return Err(LgError::Config(format!("spawn area {area:?} is invalid")));
        }
        Ok(())
    }
}
