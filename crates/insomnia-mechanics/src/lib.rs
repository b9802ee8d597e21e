//! Dice-pool mechanics for the Insomnia nightmare-horror TTRPG.
//!
//! Characters roll three thematic d6 pools (Discipline, Madness,
//! Exhaustion) as one flat sequence. Faces of 1-3 are successes;
//! whichever pool holds the most 6s (then 5s, then 4s) dominates the
//! roll, with ties across all three pools defaulting to Discipline.
//! The resolver here is pure: randomness comes in as already-rolled
//! faces, and character-sheet updates go out as delta instructions.

pub mod dice;
pub mod error;
pub mod plural;
pub mod resolution;
pub mod sheet;

pub use dice::{DicePool, PoolKind, PoolSizes};
pub use error::{MechanicsError, MechanicsResult};
pub use plural::SuccessForm;
pub use resolution::{PoolGroup, RollOutcome, resolve};
pub use sheet::{AttributeDelta, CharacterSheet, Track, post_roll_deltas};
