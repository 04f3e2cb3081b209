//! Planar geometry and heading arithmetic.
//!
//! Headings are in degrees, `0°` points along `+x` and angles grow
//! counter-clockwise.  Every heading stored anywhere in the simulation is
//! normalised into `[0, 360)`.

use std::ops::{Add, Sub};

/// A point (or displacement) in the arena plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading_deg`.
    #[inline]
    pub fn from_heading(heading_deg: f64) -> Self {
        let r = heading_deg.to_radians();
        Self::new(r.cos(), r.sin())
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }

    /// Step `distance` units from `self` along `heading_deg`.
    #[inline]
    pub fn offset(self, heading_deg: f64, distance: f64) -> Vec2 {
        self + Vec2::from_heading(heading_deg).scale(distance)
    }

    /// Bearing from `self` to `target` in `[0, 360)`.
    ///
    /// Coincident points have no defined bearing; `0°` is returned instead of
    /// propagating NaN.
    pub fn towards(self, target: Vec2) -> f64 {
        let d = target - self;
        if d.x == 0.0 && d.y == 0.0 {
            return 0.0;
        }
        normalize_heading(d.y.atan2(d.x).to_degrees())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Wrap any finite angle into `[0, 360)`.  NaN and infinities map to `0°`.
pub fn normalize_heading(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let h = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Reverse a heading (`+180°`).
#[inline]
pub fn reverse_heading(deg: f64) -> f64 {
    normalize_heading(deg + 180.0)
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned arena centred on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub half_width:  f64,
    pub half_height: f64,
}

impl Bounds {
    #[inline]
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self { half_width, half_height }
    }

    /// `true` if `p` lies inside or on the arena edge.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_width && p.y.abs() <= self.half_height
    }

    /// Bounds shrunk by `margin` on every side (never below zero extent).
    pub fn inset(&self, margin: f64) -> Bounds {
        Bounds::new(
            (self.half_width - margin).max(0.0),
            (self.half_height - margin).max(0.0),
        )
    }
}
