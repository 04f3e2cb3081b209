//! Simulation time and run budgets.
//!
//! The engine itself is clock-agnostic: it only ever sees "one more tick".
//! `RunBudget` is how the driver decides when to stop, and it is checked
//! between ticks only.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunBudget ─────────────────────────────────────────────────────────────────

/// When the driver stops calling the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunBudget {
    /// Run exactly this many ticks.
    Ticks(u64),
    /// Run until this many wall-clock seconds have elapsed.  The tick in
    /// progress always completes.
    WallClockSecs(f64),
}

impl RunBudget {
    /// `true` once the budget is spent, given ticks completed so far and the
    /// wall-clock time elapsed since the run started.
    pub fn is_exhausted(&self, ticks_done: u64, elapsed: Duration) -> bool {
        match *self {
            RunBudget::Ticks(n) => ticks_done >= n,
            RunBudget::WallClockSecs(secs) => elapsed.as_secs_f64() >= secs,
        }
    }
}

impl Default for RunBudget {
    fn default() -> Self {
        RunBudget::WallClockSecs(40.0)
    }
}

impl fmt::Display for RunBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunBudget::Ticks(n) => write!(f, "{n} ticks"),
            RunBudget::WallClockSecs(s) => write!(f, "{s} s wall-clock"),
        }
    }
}
