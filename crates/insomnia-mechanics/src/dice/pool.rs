//! Rolling the combined dice pool.

use rand::Rng;
use rand::rngs::StdRng;

use super::{DIE_SIDES, PoolSizes};

/// The full set of d6 dice for one roll, sized per pool.
///
/// Randomness is always injected: the pool never owns an RNG, so rolls
/// are reproducible under a seeded `StdRng` and the resolution logic
/// stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    sizes: PoolSizes,
}

impl DicePool {
    /// Create a pool set from per-pool sizes.
    pub fn new(sizes: PoolSizes) -> Self {
        Self { sizes }
    }

    /// The per-pool sizes this pool was built from.
    pub fn sizes(&self) -> PoolSizes {
        self.sizes
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> u32 {
        self.sizes.total()
    }

    /// Returns true if all three pools are empty.
    pub fn is_empty(&self) -> bool {
        self.sizes.total() == 0
    }

    /// Roll every die, returning the flat face sequence in fixed pool
    /// order: all Discipline dice first, then Madness, then Exhaustion.
    pub fn roll(&self, rng: &mut StdRng) -> Vec<u32> {
        (0..self.sizes.total())
            .map(|_| rng.random_range(1..=DIE_SIDES))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new(PoolSizes::default());
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.roll(&mut rng).is_empty());
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::new(PoolSizes::new(3, 2, 5));
        let faces = pool.roll(&mut rng);
        assert_eq!(faces.len(), 10);
        for face in faces {
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new(PoolSizes::new(3, 1, 2));
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(pool.roll(&mut rng1), pool.roll(&mut rng2));
    }
}
