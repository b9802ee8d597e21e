//! Journal storage and export.

use insomnia_mechanics::SuccessForm;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological chat log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                JournalEntry::Roll {
                    actor,
                    formula,
                    discipline,
                    madness,
                    exhaustion,
                    successes,
                    dominant,
                    ..
                } => {
                    out.push_str(&format!("{actor} rolls {formula}\n"));
                    out.push_str(&format!("  Discipline: {}\n", face_list(discipline)));
                    out.push_str(&format!("  Madness:    {}\n", face_list(madness)));
                    out.push_str(&format!("  Exhaustion: {}\n", face_list(exhaustion)));
                    out.push_str(&format!(
                        "  {successes} {} -- {dominant} dominates\n",
                        success_label(*successes)
                    ));
                }
                JournalEntry::AttributeRise {
                    attribute,
                    new_value,
                    max,
                    ..
                } => {
                    out.push_str(&format!("{attribute} rises to {new_value}/{max}\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("note: {text}\n"));
                }
            }
        }
        out
    }

    /// Export the journal as JSON, for host chat logs that ingest
    /// structured entries.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Session Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Roll {
                    actor,
                    formula,
                    discipline,
                    madness,
                    exhaustion,
                    successes,
                    dominant,
                    ..
                } => {
                    out.push_str(&format!("**{actor}** rolls `{formula}`\n"));
                    out.push_str(&format!("- Discipline: {}\n", face_list(discipline)));
                    out.push_str(&format!("- Madness: {}\n", face_list(madness)));
                    out.push_str(&format!("- Exhaustion: {}\n", face_list(exhaustion)));
                    out.push_str(&format!(
                        "- **{successes} {}** — *{dominant} dominates*\n\n",
                        success_label(*successes)
                    ));
                }
                JournalEntry::AttributeRise {
                    attribute,
                    new_value,
                    max,
                    ..
                } => {
                    out.push_str(&format!("*{attribute} rises to {new_value}/{max}*\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }
}

/// Render a face group like `[1, 2, 6]`; empty groups show as `-`.
fn face_list(faces: &[u32]) -> String {
    if faces.is_empty() {
        return "-".to_string();
    }
    let values: Vec<String> = faces.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(", "))
}

/// English label for a success count.
fn success_label(successes: u32) -> &'static str {
    SuccessForm::for_count(successes).pick("success", "successes", "successes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn roll_entry() -> JournalEntry {
        JournalEntry::Roll {
            actor: "Viktor".to_string(),
            formula: "6d6 (3/2/1)".to_string(),
            discipline: vec![1, 2, 6],
            madness: vec![4, 5],
            exhaustion: vec![3],
            successes: 3,
            dominant: "Madness".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn append_and_len() {
        let mut journal = Journal::new();
        assert!(journal.is_empty());
        journal.append(roll_entry());
        assert_eq!(journal.len(), 1);
        assert!(!journal.is_empty());
    }

    #[test]
    fn text_export_renders_roll() {
        let mut journal = Journal::new();
        journal.append(roll_entry());
        let text = journal.export_text();
        assert!(text.contains("Viktor rolls 6d6 (3/2/1)"));
        assert!(text.contains("Discipline: [1, 2, 6]"));
        assert!(text.contains("3 successes -- Madness dominates"));
    }

    #[test]
    fn text_export_singular_success() {
        let mut journal = Journal::new();
        journal.append(JournalEntry::Roll {
            actor: "Nell".to_string(),
            formula: "3d6 (3/0/0)".to_string(),
            discipline: vec![2, 4, 5],
            madness: vec![],
            exhaustion: vec![],
            successes: 1,
            dominant: "Discipline".to_string(),
            timestamp: Utc::now(),
        });
        let text = journal.export_text();
        assert!(text.contains("1 success -- Discipline dominates"));
        assert!(text.contains("Madness:    -"));
    }

    #[test]
    fn exports_render_rise_and_note() {
        let mut journal = Journal::new();
        journal.append(JournalEntry::AttributeRise {
            attribute: "Madness".to_string(),
            new_value: 1,
            max: 3,
            timestamp: Utc::now(),
        });
        journal.append(JournalEntry::Note {
            text: "The clocks all stopped.".to_string(),
            timestamp: Utc::now(),
        });

        let text = journal.export_text();
        assert!(text.contains("Madness rises to 1/3"));
        assert!(text.contains("note: The clocks all stopped."));

        let md = journal.export_markdown();
        assert!(md.starts_with("# Session Journal"));
        assert!(md.contains("*Madness rises to 1/3*"));
        assert!(md.contains("> The clocks all stopped."));
    }

    #[test]
    fn json_export_round_trips() {
        let mut journal = Journal::new();
        journal.append(roll_entry());
        let json = journal.export_json().unwrap();
        let entries: Vec<JournalEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries.len(), 1);
    }
}
