//! Run configuration.
//!
//! `SimConfig` is read once at start-up (typically from a TOML file by the
//! application crate), validated, and then passed by value into the engine.
//! Nothing in it changes during a run.

use crate::{Bounds, LgError, LgResult, RunBudget, Vec2};

/// Forces the talent of one agent, e.g. to pin known extremes in a demo.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TalentOverride {
    /// Agent index (construction order).
    pub agent:  u32,
    pub talent: f64,
}

/// One step of the luck-weighted contact reward table.
///
/// A scored contact pays the `reward` of the highest tier whose `min_luck`
/// the agent has reached; with no matching tier it pays `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardTier {
    pub min_luck: u32,
    pub reward:   f64,
}

impl RewardTier {
    /// 1.5 from 5 luck points, 2.0 from 10, 3.0 from 15.
    pub fn classic() -> Vec<RewardTier> {
        vec![
            RewardTier { min_luck: 5,  reward: 1.5 },
            RewardTier { min_luck: 10, reward: 2.0 },
            RewardTier { min_luck: 15, reward: 3.0 },
        ]
    }

    /// Reward for a contact made with `luck_points`, looked up in `tiers`.
    pub fn lookup(tiers: &[RewardTier], luck_points: u32) -> f64 {
        tiers
            .iter()
            .filter(|t| luck_points >= t.min_luck)
            .max_by_key(|t| t.min_luck)
            .map_or(1.0, |t| t.reward)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// All fields have defaults (see [`SimConfig::default`]) so a config file only
/// needs to name what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    // ── Population ────────────────────────────────────────────────────────
    pub agent_count: usize,

    /// How many entries of `nodes` to instantiate.
    pub node_count: usize,

    /// Fixed node placement list, in canonical order.
    pub nodes: Vec<[f64; 2]>,

    // ── Run control ───────────────────────────────────────────────────────
    /// Master RNG seed.  `None` seeds from entropy (not reproducible).
    pub seed: Option<u64>,

    pub budget: RunBudget,

    /// Deliver a snapshot to the observer every N ticks.  0 disables them.
    pub snapshot_interval_ticks: u64,

    // ── Arena ─────────────────────────────────────────────────────────────
    pub half_width:  f64,
    pub half_height: f64,

    /// Agents spawn at least this far inside the arena edge.
    pub spawn_margin: f64,

    // ── Talent / speed ────────────────────────────────────────────────────
    pub talent_mean:    f64,
    pub talent_std_dev: f64,
    pub speed_min:      f64,
    pub speed_max:      f64,
    pub talent_overrides: Vec<TalentOverride>,

    // ── Barrier ───────────────────────────────────────────────────────────
    pub wall_thickness_mean:    f64,
    pub wall_thickness_std_dev: f64,
    /// Floor applied to every thickness draw.
    pub min_wall_thickness:     f64,
    /// Floor of the pass probability as thickness grows unbounded.  In (0, 1).
    pub luck_pass_factor:       f64,
    /// Half of the barrier's drawn width; added to the agent radius to get
    /// the barrier contact distance.
    pub barrier_half_width:     f64,

    // ── Radii ─────────────────────────────────────────────────────────────
    pub approach_radius: f64,
    pub node_radius:     f64,
    pub agent_radius:    f64,

    // ── Scoring ───────────────────────────────────────────────────────────
    /// Luck-weighted contact rewards.  Empty means every contact pays 1.0.
    pub contact_rewards: Vec<RewardTier>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            agent_count: 10,
            node_count:  5,
            nodes: vec![
                [-200.0,  150.0],
                [ 200.0,  150.0],
                [-200.0, -150.0],
                [ 200.0, -150.0],
                [   0.0,    0.0],
            ],
            seed:                    None,
            budget:                  RunBudget::WallClockSecs(40.0),
            snapshot_interval_ticks: 1,
            half_width:              390.0,
            half_height:             290.0,
            spawn_margin:            10.0,
            talent_mean:             3.0,
            talent_std_dev:          1.0,
            speed_min:               0.5,
            speed_max:               20.0,
            talent_overrides:        Vec::new(),
            wall_thickness_mean:     10.0,
            wall_thickness_std_dev:  3.0,
            min_wall_thickness:      1.0,
            luck_pass_factor:        0.75,
            barrier_half_width:      0.5,
            approach_radius:         40.0,
            node_radius:             5.0,
            agent_radius:            5.0,
            contact_rewards:         Vec::new(),
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.half_width, self.half_height)
    }

    /// The first `node_count` placements, in canonical order.
    pub fn node_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.nodes.iter().take(self.node_count).map(|&p| Vec2::from(p))
    }

    /// Reject invalid parameters before the first tick.
    ///
    /// Nothing is clamped here; the only clamps in the system are the
    /// talent → speed range and the thickness floor.
    pub fn validate(&self) -> LgResult<()> {
        positive("half_width", self.half_width)?;
        positive("half_height", self.half_height)?;
        non_negative("spawn_margin", self.spawn_margin)?;

        positive("agent_radius", self.agent_radius)?;
        positive("node_radius", self.node_radius)?;
        positive("approach_radius", self.approach_radius)?;
        if self.approach_radius < self.node_radius {
            return Err(config_err(format!(
                "approach_radius ({}) must be >= node_radius ({})",
                self.approach_radius, self.node_radius
            )));
        }

        finite("talent_mean", self.talent_mean)?;
        non_negative("talent_std_dev", self.talent_std_dev)?;
        positive("speed_min", self.speed_min)?;
        positive("speed_max", self.speed_max)?;
        if self.speed_min > self.speed_max {
            return Err(config_err(format!(
                "speed_min ({}) exceeds speed_max ({})",
                self.speed_min, self.speed_max
            )));
        }

        finite("wall_thickness_mean", self.wall_thickness_mean)?;
        non_negative("wall_thickness_std_dev", self.wall_thickness_std_dev)?;
        positive("min_wall_thickness", self.min_wall_thickness)?;
        non_negative("barrier_half_width", self.barrier_half_width)?;
        let f = self.luck_pass_factor;
        if !(f > 0.0 && f < 1.0) {
            return Err(config_err(format!(
                "luck_pass_factor must lie in (0, 1), got {f}"
            )));
        }

        if self.node_count > self.nodes.len() {
            return Err(config_err(format!(
                "node_count ({}) exceeds the {} node placements supplied",
                self.node_count,
                self.nodes.len()
            )));
        }
        if let Some(p) = self.node_positions().find(|p| !p.is_finite()) {
            return Err(config_err(format!("node placement {p:?} is not finite")));
        }

        for o in &self.talent_overrides {
            if o.agent as usize >= self.agent_count {
                return Err(config_err(format!(
                    "talent override for agent {} but agent_count is {}",
                    o.agent, self.agent_count
                )));
            }
            finite("talent override", o.talent)?;
        }

        for t in &self.contact_rewards {
            non_negative("contact reward", t.reward)?;
        }

        match self.budget {
            RunBudget::Ticks(0) => Err(config_err("tick budget must be at least 1".into())),
            RunBudget::WallClockSecs(s) if !(s.is_finite() && s > 0.0) => Err(config_err(
                format!("wall-clock budget must be a positive number of seconds, got {s}"),
            )),
            _ => Ok(()),
        }
    }
}

fn config_err(msg: String) -> LgError {
    LgError::Config(msg)
}

fn finite(name: &str, v: f64) -> LgResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(config_err(format!("{name} must be finite, got {v}")))
    }
}

fn positive(name: &str, v: f64) -> LgResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(config_err(format!("{name} must be positive, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> LgResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(config_err(format!("{name} must be non-negative, got {v}")))
    }
}
