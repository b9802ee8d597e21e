//! The three thematic d6 pools and their per-roll sizing.
//!
//! Every roll draws from up to three pools (Discipline, Madness,
//! Exhaustion) rolled together as one flat sequence of d6 faces and
//! partitioned back into pools in a fixed order.

pub mod pool;

pub use pool::DicePool;

use serde::{Deserialize, Serialize};

/// Number of sides on every die in the system.
pub const DIE_SIDES: u32 = 6;

/// One of the three named dice pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolKind {
    /// The character's willpower dice, always rolled.
    Discipline,
    /// Nightmare-talent dice added for a single roll.
    Madness,
    /// Dice from how worn down the character is.
    Exhaustion,
}

impl PoolKind {
    /// The fixed evaluation order: Discipline, then Madness, then
    /// Exhaustion. Partitioning and dominance comparison both follow it.
    pub const ORDER: [PoolKind; 3] = [
        PoolKind::Discipline,
        PoolKind::Madness,
        PoolKind::Exhaustion,
    ];

    /// Display label for this pool.
    pub fn label(self) -> &'static str {
        match self {
            Self::Discipline => "Discipline",
            Self::Madness => "Madness",
            Self::Exhaustion => "Exhaustion",
        }
    }
}

impl std::fmt::Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Dice allocated to each pool for a single roll.
///
/// Each size is the base attribute value plus any bonus dice added for
/// this roll only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSizes {
    /// Dice in the Discipline pool.
    pub discipline: u32,
    /// Dice in the Madness pool.
    pub madness: u32,
    /// Dice in the Exhaustion pool.
    pub exhaustion: u32,
}

impl PoolSizes {
    /// Create pool sizes in the fixed Discipline, Madness, Exhaustion order.
    pub fn new(discipline: u32, madness: u32, exhaustion: u32) -> Self {
        Self {
            discipline,
            madness,
            exhaustion,
        }
    }

    /// Total dice across all three pools.
    pub fn total(&self) -> u32 {
        self.discipline + self.madness + self.exhaustion
    }

    /// Size of a specific pool.
    pub fn get(&self, kind: PoolKind) -> u32 {
        match kind {
            PoolKind::Discipline => self.discipline,
            PoolKind::Madness => self.madness,
            PoolKind::Exhaustion => self.exhaustion,
        }
    }

    /// The sizes paired with their pool kinds, in fixed order.
    pub fn in_order(&self) -> [(PoolKind, u32); 3] {
        PoolKind::ORDER.map(|kind| (kind, self.get(kind)))
    }
}

impl std::fmt::Display for PoolSizes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d6 ({}/{}/{})",
            self.total(),
            self.discipline,
            self.madness,
            self.exhaustion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        assert_eq!(
            PoolKind::ORDER,
            [
                PoolKind::Discipline,
                PoolKind::Madness,
                PoolKind::Exhaustion
            ]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(PoolKind::Discipline.to_string(), "Discipline");
        assert_eq!(PoolKind::Madness.to_string(), "Madness");
        assert_eq!(PoolKind::Exhaustion.to_string(), "Exhaustion");
    }

    #[test]
    fn total_and_get() {
        let sizes = PoolSizes::new(3, 2, 1);
        assert_eq!(sizes.total(), 6);
        assert_eq!(sizes.get(PoolKind::Discipline), 3);
        assert_eq!(sizes.get(PoolKind::Madness), 2);
        assert_eq!(sizes.get(PoolKind::Exhaustion), 1);
    }

    #[test]
    fn in_order_pairs_kinds_with_sizes() {
        let sizes = PoolSizes::new(3, 0, 2);
        assert_eq!(
            sizes.in_order(),
            [
                (PoolKind::Discipline, 3),
                (PoolKind::Madness, 0),
                (PoolKind::Exhaustion, 2)
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(PoolSizes::new(3, 2, 1).to_string(), "6d6 (3/2/1)");
        assert_eq!(PoolSizes::default().to_string(), "0d6 (0/0/0)");
    }
}
