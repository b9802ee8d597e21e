//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A resolved dice-pool roll.
    Roll {
        /// Who rolled.
        actor: String,
        /// The roll formula, e.g. `6d6 (3/2/1)`.
        formula: String,
        /// Faces in the Discipline pool.
        discipline: Vec<u32>,
        /// Faces in the Madness pool.
        madness: Vec<u32>,
        /// Faces in the Exhaustion pool.
        exhaustion: Vec<u32>,
        /// Successes across all pools.
        successes: u32,
        /// Display name of the dominant pool.
        dominant: String,
        /// When the roll happened.
        timestamp: DateTime<Utc>,
    },
    /// A post-roll attribute rise.
    AttributeRise {
        /// Which attribute rose.
        attribute: String,
        /// The value after the rise.
        new_value: u32,
        /// The attribute's maximum.
        max: u32,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A freeform player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}
