//! Strongly typed identifier wrappers.
//!
//! Agents and fixed nodes live in flat arrays for the whole run; an id is the
//! index into those arrays.  Ids are `Copy + Ord + Hash` so they work as map
//! keys (the per-agent gate table is keyed by `NodeId`).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in `AgentStore`.  Construction order is the canonical
    /// processing order within a tick.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a fixed node.  Construction order is the canonical scan order
    /// used to pick the single node an agent interacts with per tick.
    pub struct NodeId(u32);
}
