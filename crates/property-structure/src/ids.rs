//! Node Identifiers
//!
//! String ids, one newtype per tree level, and the sequence that mints them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An id minted from a level prefix and a sequence number (`unit-7`)
pub trait GeneratedId: Sized {
    const PREFIX: &'static str;

    fn from_seq(seq: u128) -> Self;

    fn as_str(&self) -> &str;

    /// Numeric suffix if the id follows the generated `prefix-N` shape
    fn seq(&self) -> Option<u128> {
        self.as_str()
            .strip_prefix(Self::PREFIX)?
            .strip_prefix('-')?
            .parse()
            .ok()
    }
}

macro_rules! node_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl GeneratedId for $name {
            const PREFIX: &'static str = $prefix;

            fn from_seq(seq: u128) -> Self {
                Self(format!("{}-{}", $prefix, seq))
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

node_id!(
    /// Identifies a floor among the property's floors
    FloorId, "floor"
);
node_id!(
    /// Identifies a unit within its floor
    UnitId, "unit"
);
node_id!(
    /// Identifies a room within its unit
    RoomId, "room"
);
node_id!(
    /// Identifies a bedspace within its room
    BedspaceId, "bed"
);
node_id!(
    /// Identifies a common area within its floor
    CommonAreaId, "common-area"
);

/// Monotonic id source shared by every level of one tree.
///
/// A loaded suffix too large to step past is treated like a non-generated
/// id and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u128,
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next: u128::from(next.max(1)) }
    }

    pub fn mint<T: GeneratedId>(&mut self) -> T {
        let id = T::from_seq(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Make sure later ids land after `id` if it carries a sequence number
    pub fn observe<T: GeneratedId>(&mut self, id: &T) {
        if let Some(after) = id.seq().and_then(|seq| seq.checked_add(1)) {
            self.next = self.next.max(after);
        }
    }

    pub fn peek(&self) -> u128 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_uses_level_prefix() {
        let mut seq = IdSequence::default();
        let floor: FloorId = seq.mint();
        let common: CommonAreaId = seq.mint();
        assert_eq!(floor.as_str(), "floor-1");
        assert_eq!(common.as_str(), "common-area-2");
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn test_observe_skips_past_loaded_ids() {
        let mut seq = IdSequence::default();
        seq.observe(&RoomId::new("room-41"));
        seq.observe(&RoomId::new("lobby"));
        seq.observe(&UnitId::new("unit-3"));
        let next: BedspaceId = seq.mint();
        assert_eq!(next.as_str(), "bed-42");
    }

    #[test]
    fn test_seq_requires_exact_prefix() {
        assert_eq!(CommonAreaId::new("common-area-9").seq(), Some(9));
        assert_eq!(FloorId::new("floorx-9").seq(), None);
        assert_eq!(FloorId::new("floor-").seq(), None);
    }

    #[test]
    fn test_minted_past_u64_are_observed() {
        let mut seq = IdSequence::default();
        seq.observe(&FloorId::new("floor-18446744073709551616"));
        let next: FloorId = seq.mint();
        assert_eq!(next.as_str(), "floor-18446744073709551617");
    }

    #[test]
    fn test_unsteppable_suffix_ignored() {
        let mut seq = IdSequence::default();
        seq.observe(&UnitId::new(format!("unit-{}", u128::MAX)));
        let next: UnitId = seq.mint();
        assert_eq!(next.as_str(), "unit-1");
    }

    #[test]
    fn test_largest_suffix_does_not_overflow() {
        let mut seq = IdSequence::default();
        seq.observe(&FloorId::new("floor-18446744073709551615"));
        let first: FloorId = seq.mint();
        let second: FloorId = seq.mint();
        assert_eq!(first.as_str(), "floor-18446744073709551616");
        assert_eq!(second.as_str(), "floor-18446744073709551617");
    }
}
