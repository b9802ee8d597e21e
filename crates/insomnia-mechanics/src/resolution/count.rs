//! Face counting within a pool group.

/// Highest face value that counts as a success.
pub const SUCCESS_MAX: u32 = 3;

/// Count the successes in a group: every face of 1, 2, or 3.
pub fn count_successes(faces: &[u32]) -> u32 {
    faces.iter().filter(|&&f| f <= SUCCESS_MAX).count() as u32
}

/// Count faces showing exactly `target`. Dominance looks only at 6s,
/// 5s, and 4s; faces 1-3 never enter that comparison.
pub fn count_value(faces: &[u32], target: u32) -> u32 {
    faces.iter().filter(|&&f| f == target).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn low_faces_succeed() {
        assert_eq!(count_successes(&[1, 2, 3]), 3);
        assert_eq!(count_successes(&[4, 5, 6]), 0);
        assert_eq!(count_successes(&[1, 6, 2, 5, 3, 4]), 3);
    }

    #[test]
    fn empty_group() {
        assert_eq!(count_successes(&[]), 0);
        assert_eq!(count_value(&[], 6), 0);
    }

    #[test]
    fn exact_value_counts() {
        let faces = [6, 6, 5, 4, 4, 4, 1];
        assert_eq!(count_value(&faces, 6), 2);
        assert_eq!(count_value(&faces, 5), 1);
        assert_eq!(count_value(&faces, 4), 3);
        assert_eq!(count_value(&faces, 1), 1);
        assert_eq!(count_value(&faces, 2), 0);
    }

    proptest! {
        #[test]
        fn successes_and_failures_partition_the_group(
            faces in proptest::collection::vec(1u32..=6, 0..32)
        ) {
            let successes = count_successes(&faces);
            let failures = faces.iter().filter(|&&f| f >= 4).count() as u32;
            prop_assert_eq!(successes + failures, faces.len() as u32);
        }

        #[test]
        fn value_counts_sum_to_group_len(
            faces in proptest::collection::vec(1u32..=6, 0..32)
        ) {
            let total: u32 = (1..=6).map(|v| count_value(&faces, v)).sum();
            prop_assert_eq!(total, faces.len() as u32);
        }
    }
}
