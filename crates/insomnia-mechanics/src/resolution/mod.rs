//! Roll resolution: partition, success counting, and dominance.
//!
//! The resolver is pure. Randomness is supplied externally as
//! already-rolled face values (see [`crate::dice::DicePool`]); each
//! call is independent, stateless, and safe to run concurrently.

pub mod count;
pub mod dominance;
pub mod partition;

pub use count::{SUCCESS_MAX, count_successes, count_value};
pub use dominance::{PoolScore, determine_dominant};
pub use partition::partition;

use serde::{Deserialize, Serialize};

use crate::dice::{PoolKind, PoolSizes};
use crate::error::{MechanicsError, MechanicsResult};

/// One pool's share of the roll: its kind and its faces, in the order
/// they were rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolGroup {
    /// Which pool this group belongs to.
    pub kind: PoolKind,
    /// The faces assigned to this pool.
    pub faces: Vec<u32>,
}

impl PoolGroup {
    /// Successes within this group alone.
    pub fn successes(&self) -> u32 {
        count_successes(&self.faces)
    }
}

/// The resolved result of one roll. Derived per call and immediately
/// consumed for rendering; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The three pool groups in fixed order.
    pub groups: [PoolGroup; 3],
    /// Successes summed across all three pools.
    pub total_successes: u32,
    /// The pool that speaks for this roll.
    pub dominant: PoolKind,
}

impl RollOutcome {
    /// The group for a specific pool.
    pub fn group(&self, kind: PoolKind) -> &PoolGroup {
        match kind {
            PoolKind::Discipline => &self.groups[0],
            PoolKind::Madness => &self.groups[1],
            PoolKind::Exhaustion => &self.groups[2],
        }
    }
}

/// Resolve a roll: validate the input, partition the faces into pools,
/// count successes, and determine the dominant pool.
///
/// Fails with [`MechanicsError::EmptyRoll`] when all pools are empty,
/// [`MechanicsError::FaceOutOfRange`] for a face outside 1-6, and
/// [`MechanicsError::PoolSizeMismatch`] when the face count does not
/// match the pool sizes. No partial result is ever produced.
pub fn resolve(sizes: &PoolSizes, faces: &[u32]) -> MechanicsResult<RollOutcome> {
    if sizes.total() == 0 {
        return Err(MechanicsError::EmptyRoll);
    }
    if let Some(&bad) = faces.iter().find(|&&f| !(1..=6).contains(&f)) {
        return Err(MechanicsError::FaceOutOfRange(bad));
    }

    let groups = partition(faces, sizes)?;
    let total_successes = groups.iter().map(PoolGroup::successes).sum();
    let dominant = determine_dominant(&groups);

    Ok(RollOutcome {
        groups,
        total_successes,
        dominant,
    })
}
