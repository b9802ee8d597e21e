//! Sheet session: rolling pools for one character.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use insomnia_mechanics::{
    AttributeDelta, CharacterSheet, DicePool, MechanicsError, PoolSizes, RollOutcome, resolve,
    post_roll_deltas,
};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::journal::{Journal, JournalEntry};

/// Bonus dice requested for a single roll.
///
/// Bonus madness dice call on the character's nightmare power; a bonus
/// exhaustion die pushes their talent. Either costs a permanent +1 to
/// the matching attribute afterward, capped at its maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollRequest {
    /// Madness dice added for this roll.
    pub madness_bonus: u32,
    /// Exhaustion dice added for this roll.
    pub exhaustion_bonus: u32,
}

/// Everything one roll produced: the sizes rolled, the resolved
/// outcome, and the attribute deltas that were applied.
#[derive(Debug, Clone)]
pub struct RollReport {
    /// Dice allocated per pool, bonuses included.
    pub sizes: PoolSizes,
    /// The resolved roll.
    pub outcome: RollOutcome,
    /// Post-roll attribute rises that were applied to the sheet.
    pub deltas: Vec<AttributeDelta>,
}

/// An interactive session around one character sheet.
///
/// Owns the sheet, a seeded RNG, and the journal. Rolls read attribute
/// values, resolve the pools, journal the result, and apply the
/// post-roll deltas for any bonus dice used.
pub struct SheetSession {
    sheet: CharacterSheet,
    journal: Journal,
    rng: StdRng,
}

impl SheetSession {
    /// Create a session for a sheet.
    pub fn new(sheet: CharacterSheet, config: SessionConfig) -> Self {
        Self {
            sheet,
            journal: Journal::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The character sheet.
    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    /// The session journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Consume the session, returning the (possibly updated) sheet.
    pub fn into_sheet(self) -> CharacterSheet {
        self.sheet
    }

    /// Roll the character's pools with the requested bonus dice.
    ///
    /// Refuses a roll whose total pool is empty before touching the
    /// RNG. On success the roll is journaled and any post-roll
    /// attribute rises are applied to the sheet and journaled too.
    pub fn roll(&mut self, request: &RollRequest) -> SessionResult<RollReport> {
        let base = self.sheet.base_sizes();
        let sizes = PoolSizes::new(
            base.discipline,
            base.madness + request.madness_bonus,
            base.exhaustion + request.exhaustion_bonus,
        );
        if sizes.total() == 0 {
            return Err(MechanicsError::EmptyRoll.into());
        }

        let faces = DicePool::new(sizes).roll(&mut self.rng);
        let outcome = resolve(&sizes, &faces)?;

        self.journal.append(JournalEntry::Roll {
            actor: self.sheet.name.clone(),
            formula: sizes.to_string(),
            discipline: outcome.groups[0].faces.clone(),
            madness: outcome.groups[1].faces.clone(),
            exhaustion: outcome.groups[2].faces.clone(),
            successes: outcome.total_successes,
            dominant: outcome.dominant.to_string(),
            timestamp: Utc::now(),
        });

        let deltas = post_roll_deltas(request.madness_bonus, request.exhaustion_bonus);
        for delta in &deltas {
            let new_value = self.sheet.apply(*delta);
            let max = match delta {
                AttributeDelta::RaiseMadness => self.sheet.madness.max,
                AttributeDelta::RaiseExhaustion => self.sheet.exhaustion.max,
            };
            self.journal.append(JournalEntry::AttributeRise {
                attribute: delta.attribute().to_string(),
                new_value,
                max,
                timestamp: Utc::now(),
            });
        }

        Ok(RollReport {
            sizes,
            outcome,
            deltas,
        })
    }

    /// Record a freeform note in the journal.
    pub fn note(&mut self, text: &str) {
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
    }
}
