//! Clamped attribute tracks (discipline, madness, exhaustion).

use serde::{Deserialize, Serialize};

/// A numeric attribute clamped between 0 and a maximum.
///
/// Tracks render as a row of filled and empty boxes on the sheet, so
/// the box view lives here alongside the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Current value.
    pub current: u32,
    /// Maximum value.
    pub max: u32,
}

impl Track {
    /// Create a track, clamping the starting value to the maximum.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Raise the track by `amount`, capped at the maximum. Returns the
    /// new value.
    pub fn raise(&mut self, amount: u32) -> u32 {
        self.current = (self.current + amount).min(self.max);
        self.current
    }

    /// Drop the track back to zero.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Returns true if the track is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// One flag per box on the sheet: filled up to the current value.
    pub fn boxes(&self) -> Vec<bool> {
        (0..self.max).map(|i| i < self.current).collect()
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
