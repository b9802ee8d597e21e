//! Slicing the shared face sequence back into pool groups.

use crate::dice::PoolSizes;
use crate::error::{MechanicsError, MechanicsResult};

use super::PoolGroup;

/// Split the flat face sequence into the three pool groups.
///
/// Slicing is positional and order-preserving: the first
/// `sizes.discipline` faces belong to Discipline, the next
/// `sizes.madness` to Madness, the rest to Exhaustion. Zero-size pools
/// yield empty groups. A length mismatch is rejected rather than
/// sliced short.
pub fn partition(faces: &[u32], sizes: &PoolSizes) -> MechanicsResult<[PoolGroup; 3]> {
    let expected = sizes.total();
    if faces.len() as u32 != expected {
        return Err(MechanicsError::PoolSizeMismatch {
            expected,
            actual: faces.len() as u32,
        });
    }

    let mut index = 0;
    Ok(sizes.in_order().map(|(kind, size)| {
        let group = PoolGroup {
            kind,
            faces: faces[index..index + size as usize].to_vec(),
        };
        index += size as usize;
        group
    }))
}
