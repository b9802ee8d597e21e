//! The character questionnaire.
//!
//! Character creation walks a fixed list of questions. Each step asks
//! its prompt through an injected [`Prompter`] and gets back a tagged
//! [`StepOutcome`]: advance with an answer, step back, or cancel the
//! whole flow. The loop is an explicit index over the step list, so
//! backing up and bailing out are ordinary control flow.

use insomnia_mechanics::CharacterSheet;
use insomnia_mechanics::sheet::{REACTION_POINTS, Reactions};

use crate::error::SessionError;

/// Identifies one question in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    /// The character's name.
    Name,
    /// Day job or profession.
    Role,
    /// The source of the insomnia.
    WhatKeepsMeUp,
    /// The opening scene's situation.
    WhatJustHappened,
    /// Outward appearance.
    Appearance,
    /// The hidden self.
    WhoIReallyAm,
    /// Where the story is headed.
    Path,
    /// The nightmare power.
    MadnessSkill,
    /// The pushed-past-human talent.
    ExhaustionTalent,
    /// The fight/flight point split.
    Reactions,
}

/// One question in the character questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Which question this is.
    pub id: StepId,
    /// Short title shown as the prompt.
    pub title: &'static str,
    /// Longer guidance shown alongside the prompt.
    pub hint: &'static str,
}

/// The questionnaire steps, asked in order.
pub const STEPS: [Step; 10] = [
    Step {
        id: StepId::Name,
        title: "Your name",
        hint: "What the character is called.",
    },
    Step {
        id: StepId::Role,
        title: "Who am I?",
        hint: "The character's day job or profession.",
    },
    Step {
        id: StepId::WhatKeepsMeUp,
        title: "What keeps me up at night?",
        hint: "The source of the character's insomnia, and the immediate \
               history that brought them here.",
    },
    Step {
        id: StepId::WhatJustHappened,
        title: "What just happened?",
        hint: "What is happening to the character in their very first scene.",
    },
    Step {
        id: StepId::Appearance,
        title: "What am I like on the outside?",
        hint: "The first impression the character makes; what is obvious \
               about them at a glance.",
    },
    Step {
        id: StepId::WhoIReallyAm,
        title: "Who am I really?",
        hint: "The secrets the character keeps; the part of themselves they \
               hide from the world when they can.",
    },
    Step {
        id: StepId::Path,
        title: "What is my path?",
        hint: "The character's goals, and how their story might come to an \
               ending.",
    },
    Step {
        id: StepId::MadnessSkill,
        title: "Madness skill",
        hint: "The character's impossible nightmare power: invisibility, mind \
               reading, unseen helpers.",
    },
    Step {
        id: StepId::ExhaustionTalent,
        title: "Exhaustion talent",
        hint: "A mundane talent pushed supernaturally past human limits: \
               running, shooting, playing an instrument.",
    },
    Step {
        id: StepId::Reactions,
        title: "Reactions",
        hint: "Split 3 points between fight and flight, like 2/1. Unspent \
               reactions come into play when madness dominates.",
    },
];

/// What a prompter returns for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Accept this answer and advance.
    Next(String),
    /// Return to the previous step.
    Back,
    /// Abandon the questionnaire.
    Cancel,
}

/// Asks questionnaire steps. Implemented over stdin by the CLI and by
/// scripted prompters in tests.
pub trait Prompter {
    /// Ask one step, offering the current answer as the default.
    fn ask(&mut self, step: &Step, default: &str) -> StepOutcome;

    /// Report a rejected answer before the same step is asked again.
    fn invalid(&mut self, _message: &str) {}
}

/// Parse a reaction split like `2/1` or `2 1`; the points must sum to
/// exactly the allowed total.
pub fn parse_reaction_split(text: &str) -> Result<Reactions, SessionError> {
    let parts: Vec<&str> = text
        .split(['/', ' '])
        .filter(|part| !part.is_empty())
        .collect();
    let [fight, flight] = parts.as_slice() else {
        return Err(SessionError::InvalidChoice(format!(
            "expected two numbers like 2/1, got \"{text}\""
        )));
    };
    let fight: u32 = fight
        .parse()
        .map_err(|_| SessionError::InvalidChoice(format!("not a number: \"{fight}\"")))?;
    let flight: u32 = flight
        .parse()
        .map_err(|_| SessionError::InvalidChoice(format!("not a number: \"{flight}\"")))?;
    if fight + flight != REACTION_POINTS {
        return Err(SessionError::InvalidChoice(format!(
            "fight and flight must add up to {REACTION_POINTS}, got {}",
            fight + flight
        )));
    }
    Ok(Reactions { fight, flight })
}

/// Run the questionnaire over an existing sheet.
///
/// Current sheet values are the step defaults, so the flow doubles as
/// an editor. Returns the updated sheet, or `None` if the prompter
/// cancelled; a cancelled flow leaves no trace on the input sheet.
pub fn run(sheet: &CharacterSheet, prompter: &mut dyn Prompter) -> Option<CharacterSheet> {
    let mut answers: Vec<String> = STEPS
        .iter()
        .map(|step| default_answer(sheet, step.id))
        .collect();
    let mut reactions = sheet.reactions;

    let mut index = 0;
    while index < STEPS.len() {
        let step = &STEPS[index];
        match prompter.ask(step, &answers[index]) {
            StepOutcome::Next(text) => {
                if step.id == StepId::Reactions {
                    match parse_reaction_split(&text) {
                        Ok(split) => {
                            reactions = split;
                            answers[index] = text;
                            index += 1;
                        }
                        Err(err) => prompter.invalid(&err.to_string()),
                    }
                } else {
                    answers[index] = text;
                    index += 1;
                }
            }
            StepOutcome::Back => index = index.saturating_sub(1),
            StepOutcome::Cancel => return None,
        }
    }

    let mut updated = sheet.clone();
    for (step, answer) in STEPS.iter().zip(answers) {
        let answer = answer.trim().to_string();
        match step.id {
            StepId::Name => updated.name = answer,
            StepId::Role => updated.role = answer,
            StepId::WhatKeepsMeUp => updated.what_keeps_me_up = answer,
            StepId::WhatJustHappened => updated.what_just_happened = answer,
            StepId::Appearance => updated.appearance = answer,
            StepId::WhoIReallyAm => updated.who_i_really_am = answer,
            StepId::Path => updated.path = answer,
            StepId::MadnessSkill => updated.madness_skill = answer,
            StepId::ExhaustionTalent => updated.exhaustion_talent = answer,
            StepId::Reactions => updated.reactions = reactions,
        }
    }
    Some(updated)
}

/// The sheet's current value for a step, offered as its default answer.
fn default_answer(sheet: &CharacterSheet, id: StepId) -> String {
    match id {
        StepId::Name => sheet.name.clone(),
        StepId::Role => sheet.role.clone(),
        StepId::WhatKeepsMeUp => sheet.what_keeps_me_up.clone(),
        StepId::WhatJustHappened => sheet.what_just_happened.clone(),
        StepId::Appearance => sheet.appearance.clone(),
        StepId::WhoIReallyAm => sheet.who_i_really_am.clone(),
        StepId::Path => sheet.path.clone(),
        StepId::MadnessSkill => sheet.madness_skill.clone(),
        StepId::ExhaustionTalent => sheet.exhaustion_talent.clone(),
        StepId::Reactions => format!("{}/{}", sheet.reactions.fight, sheet.reactions.flight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A prompter driven by a fixed script of outcomes.
    struct Scripted {
        outcomes: Vec<StepOutcome>,
        asked: Vec<&'static str>,
        rejections: u32,
    }

    impl Scripted {
        fn new(outcomes: Vec<StepOutcome>) -> Self {
            Self {
                outcomes,
                asked: Vec::new(),
                rejections: 0,
            }
        }
    }

    impl Prompter for Scripted {
        fn ask(&mut self, step: &Step, _default: &str) -> StepOutcome {
            self.asked.push(step.title);
            if self.outcomes.is_empty() {
                StepOutcome::Cancel
            } else {
                self.outcomes.remove(0)
            }
        }

        fn invalid(&mut self, _message: &str) {
            self.rejections += 1;
        }
    }

    fn answer_all(reaction_split: &str) -> Vec<StepOutcome> {
        let mut outcomes: Vec<StepOutcome> = [
            "Viktor",
            "Night-shift cabbie",
            "The passenger who never arrived",
            "A fare just asked for a street that does not exist",
            "Hollow-eyed, polite, exact change",
            "I memorized every route out of the city",
            "Find where the lost fares go",
            "Doors open for me",
            "Driving",
        ]
        .iter()
        .map(|s| StepOutcome::Next((*s).to_string()))
        .collect();
        outcomes.push(StepOutcome::Next(reaction_split.to_string()));
        outcomes
    }

    #[test]
    fn full_run_fills_the_sheet() {
        let mut prompter = Scripted::new(answer_all("2/1"));
        let sheet = run(&CharacterSheet::default(), &mut prompter).unwrap();
        assert_eq!(sheet.name, "Viktor");
        assert_eq!(sheet.role, "Night-shift cabbie");
        assert_eq!(sheet.madness_skill, "Doors open for me");
        assert_eq!(sheet.exhaustion_talent, "Driving");
        assert_eq!(sheet.reactions, Reactions { fight: 2, flight: 1 });
        assert_eq!(prompter.asked.len(), STEPS.len());
    }

    #[test]
    fn cancel_returns_none() {
        let mut prompter = Scripted::new(vec![
            StepOutcome::Next("Viktor".to_string()),
            StepOutcome::Cancel,
        ]);
        assert!(run(&CharacterSheet::default(), &mut prompter).is_none());
    }

    #[test]
    fn back_revisits_the_previous_step() {
        let mut outcomes = vec![
            StepOutcome::Next("Wrong name".to_string()),
            StepOutcome::Back,
            StepOutcome::Next("Viktor".to_string()),
        ];
        outcomes.extend(answer_all("3/0").into_iter().skip(1));
        let mut prompter = Scripted::new(outcomes);
        let sheet = run(&CharacterSheet::default(), &mut prompter).unwrap();
        assert_eq!(sheet.name, "Viktor");
        assert_eq!(prompter.asked[0], "Your name");
        assert_eq!(prompter.asked[1], "Who am I?");
        assert_eq!(prompter.asked[2], "Your name");
    }

    #[test]
    fn back_at_first_step_stays_there() {
        let mut outcomes = vec![StepOutcome::Back];
        outcomes.extend(answer_all("0/3"));
        let mut prompter = Scripted::new(outcomes);
        let sheet = run(&CharacterSheet::default(), &mut prompter).unwrap();
        assert_eq!(sheet.name, "Viktor");
        assert_eq!(prompter.asked[0], "Your name");
        assert_eq!(prompter.asked[1], "Your name");
    }

    #[test]
    fn bad_reaction_split_reasks_the_step() {
        let mut outcomes = answer_all("5/1");
        outcomes.push(StepOutcome::Next("1/2".to_string()));
        let mut prompter = Scripted::new(outcomes);
        let sheet = run(&CharacterSheet::default(), &mut prompter).unwrap();
        assert_eq!(prompter.rejections, 1);
        assert_eq!(sheet.reactions, Reactions { fight: 1, flight: 2 });
    }

    #[test]
    fn parse_reaction_split_accepts_both_separators() {
        assert_eq!(
            parse_reaction_split("2/1").unwrap(),
            Reactions { fight: 2, flight: 1 }
        );
        assert_eq!(
            parse_reaction_split("0 3").unwrap(),
            Reactions { fight: 0, flight: 3 }
        );
    }

    #[test]
    fn parse_reaction_split_rejects_bad_input() {
        assert!(parse_reaction_split("").is_err());
        assert!(parse_reaction_split("3").is_err());
        assert!(parse_reaction_split("two/one").is_err());
        assert!(parse_reaction_split("2/2").is_err());
        assert!(parse_reaction_split("1/1/1").is_err());
    }
}
