//! Grammatical-number selection for success counts.

use serde::{Deserialize, Serialize};

/// Which grammatical form a success count takes when rendered.
///
/// Three buckets: exactly one, a few (two through four), and many
/// (zero, or five and up). Languages with a singular/paucal/plural
/// split need all three; English maps `Few` and `Many` to the same
/// word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessForm {
    /// Exactly one success.
    One,
    /// Two to four successes.
    Few,
    /// Zero successes, or five and more.
    Many,
}

impl SuccessForm {
    /// Select the form for a success count.
    pub fn for_count(count: u32) -> Self {
        match count {
            1 => Self::One,
            2..=4 => Self::Few,
            _ => Self::Many,
        }
    }

    /// Pick the matching label out of the three supplied forms.
    pub fn pick<'a>(self, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
        match self {
            Self::One => one,
            Self::Few => few,
            Self::Many => many,
        }
    }
}
