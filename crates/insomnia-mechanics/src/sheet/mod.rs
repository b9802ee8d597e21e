//! The character sheet: narrative identity, attribute tracks,
//! reactions, inventory, and scars.
//!
//! The sheet is a plain serde document; a host application owns where
//! it is stored. The mechanics layer only reads attribute values when
//! building a roll and emits [`AttributeDelta`] instructions afterward
//! instead of writing anything itself.

pub mod track;

pub use track::Track;

use serde::{Deserialize, Serialize};

use crate::dice::PoolSizes;

/// Default maximum for the discipline track.
pub const DISCIPLINE_MAX: u32 = 3;
/// Default maximum for the madness track.
pub const MADNESS_MAX: u32 = 3;
/// Default maximum for the exhaustion track.
pub const EXHAUSTION_MAX: u32 = 6;
/// Points split between the two reactions.
pub const REACTION_POINTS: u32 = 3;

/// Reaction points, split between fighting and fleeing.
///
/// A finished character splits exactly [`REACTION_POINTS`] between the
/// two; a blank sheet starts unallocated. The questionnaire enforces
/// the split, not this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    /// Points in the fight reaction.
    pub fight: u32,
    /// Points in the flight reaction.
    pub flight: u32,
}

impl Reactions {
    /// Total allocated points.
    pub fn total(&self) -> u32 {
        self.fight + self.flight
    }
}

/// An item the character carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Freeform description.
    #[serde(default)]
    pub description: String,
}

/// A character sheet with blank-sheet defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Who the character is by day (profession).
    pub role: String,
    /// The source of the character's insomnia.
    pub what_keeps_me_up: String,
    /// What happens in the character's very first scene.
    pub what_just_happened: String,
    /// The first impression the character makes.
    pub appearance: String,
    /// The part of themselves they hide.
    pub who_i_really_am: String,
    /// Where the character's story is headed.
    pub path: String,
    /// The character's impossible nightmare power.
    pub madness_skill: String,
    /// The mundane talent pushed past human limits.
    pub exhaustion_talent: String,
    /// Willpower dice, rolled on every pool roll.
    pub discipline: Track,
    /// How far madness has taken hold.
    pub madness: Track,
    /// How worn down the character is.
    pub exhaustion: Track,
    /// Fight/flight reaction split.
    pub reactions: Reactions,
    /// Carried items.
    pub inventory: Vec<Item>,
    /// Permanent marks the nightmares have left.
    pub scars: Vec<String>,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            what_keeps_me_up: String::new(),
            what_just_happened: String::new(),
            appearance: String::new(),
            who_i_really_am: String::new(),
            path: String::new(),
            madness_skill: String::new(),
            exhaustion_talent: String::new(),
            discipline: Track::new(DISCIPLINE_MAX, DISCIPLINE_MAX),
            madness: Track::new(0, MADNESS_MAX),
            exhaustion: Track::new(0, EXHAUSTION_MAX),
            reactions: Reactions::default(),
            inventory: Vec::new(),
            scars: Vec::new(),
        }
    }
}

impl CharacterSheet {
    /// Pool sizes for a roll with no bonus dice: the current attribute
    /// values in fixed pool order.
    pub fn base_sizes(&self) -> PoolSizes {
        PoolSizes::new(
            self.discipline.current,
            self.madness.current,
            self.exhaustion.current,
        )
    }

    /// Apply a post-roll delta, returning the attribute's new value.
    pub fn apply(&mut self, delta: AttributeDelta) -> u32 {
        match delta {
            AttributeDelta::RaiseMadness => self.madness.raise(1),
            AttributeDelta::RaiseExhaustion => self.exhaustion.raise(1),
        }
    }
}

/// A post-roll update instruction: raise an attribute by one, capped at
/// its track maximum. Emitted when bonus dice were requested for a
/// roll; applying it is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeDelta {
    /// Madness rises by one (bonus madness dice were rolled).
    RaiseMadness,
    /// Exhaustion rises by one (bonus exhaustion dice were rolled).
    RaiseExhaustion,
}

impl AttributeDelta {
    /// Display label of the attribute this delta touches.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::RaiseMadness => "Madness",
            Self::RaiseExhaustion => "Exhaustion",
        }
    }
}

/// The deltas a roll incurs, given the bonus dice it used. One capped
/// +1 per attribute whose bonus was nonzero, in fixed pool order.
pub fn post_roll_deltas(madness_bonus: u32, exhaustion_bonus: u32) -> Vec<AttributeDelta> {
    let mut deltas = Vec::new();
    if madness_bonus > 0 {
        deltas.push(AttributeDelta::RaiseMadness);
    }
    if exhaustion_bonus > 0 {
        deltas.push(AttributeDelta::RaiseExhaustion);
    }
    deltas
}
