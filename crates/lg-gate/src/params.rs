//! Barrier and scoring parameters.

use lg_core::{RewardTier, SimConfig};

use crate::{GateError, GateResult};

/// The slice of [`SimConfig`] the gate engine needs.
#[derive(Clone, Debug, PartialEq)]
pub struct GateParams {
    pub wall_thickness_mean:    f64,
    pub wall_thickness_std_dev: f64,
    pub min_wall_thickness:     f64,
    pub luck_pass_factor:       f64,
    pub barrier_half_width:     f64,
    /// Empty means every scored contact pays exactly 1.0.
    pub contact_rewards:        Vec<RewardTier>,
}

impl GateParams {
    pub fn from_config(config: &SimConfig) -> GateResult<Self> {
        let params = Self {
            wall_thickness_mean:    config.wall_thickness_mean,
            wall_thickness_std_dev: config.wall_thickness_std_dev,
            min_wall_thickness:     config.min_wall_thickness,
            luck_pass_factor:       config.luck_pass_factor,
            barrier_half_width:     config.barrier_half_width,
            contact_rewards:        config.contact_rewards.clone(),
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> GateResult<()> {
        let f = self.luck_pass_factor;
        if !(f > 0.0 && f < 1.0) {
            return Err(GateError::Config(format!("luck_pass_factor must lie in (0, 1), got {f}")));
        }
        if !(self.min_wall_thickness.is_finite() && self.min_wall_thickness > 0.0) {
            return Err(GateError::Config(format!(
                "min_wall_thickness must be positive, got {}",
                self.min_wall_thickness
            )));
        }
        if !(self.wall_thickness_std_dev.is_finite() && self.wall_thickness_std_dev >= 0.0) {
            return Err(GateError::Config(format!(
                "wall_thickness_std_dev must be non-negative, got {}",
                self.wall_thickness_std_dev
            )));
        }
        if !(self.barrier_half_width.is_finite() && self.barrier_half_width >= 0.0) {
            return Err(GateError::Config(format!(
                "barrier_half_width must be non-negative, got {}",
                self.barrier_half_width
            )));
        }
        Ok(())
    }

    /// Reward paid for a contact made with `luck_points`.
    #[inline]
    pub fn contact_reward(&self, luck_points: u32) -> f64 {
        RewardTier::lookup(&self.contact_rewards, luck_points)
    }
}

/// Probability that an agent of `speed` gets through a barrier of `thickness`.
///
/// ```text
/// p = (speed + factor · thickness) / (speed + thickness)
/// ```
///
/// For positive `speed` and `thickness`, `p` lies strictly between `factor`
/// and 1.  It tends to 1 as `thickness → 0` or `speed → ∞`, and to `factor`
/// as `thickness → ∞`.
#[inline]
pub fn pass_probability(speed: f64, thickness: f64, factor: f64) -> f64 {
    (speed + factor * thickness) / (speed + thickness)
}
