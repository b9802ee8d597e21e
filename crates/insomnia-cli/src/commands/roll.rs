use std::path::Path;

use colored::Colorize;

use insomnia_mechanics::{PoolKind, SuccessForm};
use insomnia_session::{RollRequest, SessionConfig, SheetSession};

use super::{load_sheet, save_sheet};

/// Roll the character's pools and print the result.
pub fn run(
    file: &Path,
    madness: u32,
    exhaustion: u32,
    seed: Option<u64>,
    save: bool,
) -> Result<(), String> {
    let sheet = load_sheet(file)?;
    let actor = if sheet.name.is_empty() {
        "The sleepless".to_string()
    } else {
        sheet.name.clone()
    };

    let config = SessionConfig::default().with_seed(seed.unwrap_or_else(rand::random));
    let mut session = SheetSession::new(sheet, config);

    let request = RollRequest {
        madness_bonus: madness,
        exhaustion_bonus: exhaustion,
    };
    let report = session.roll(&request).map_err(|e| e.to_string())?;

    println!("{} rolls {}", actor.bold(), report.sizes);
    for group in &report.outcome.groups {
        println!(
            "  {:<11} {}",
            format!("{}:", group.kind),
            colored_faces(group.kind, &group.faces)
        );
    }

    let label =
        SuccessForm::for_count(report.outcome.total_successes).pick("success", "successes", "successes");
    println!(
        "  {} {}",
        format!("{} {label}", report.outcome.total_successes)
            .green()
            .bold(),
        format!("-- {} dominates", report.outcome.dominant).cyan()
    );

    for delta in &report.deltas {
        println!("  {}", format!("{} rises by 1", delta.attribute()).yellow());
    }

    if save {
        save_sheet(file, &session.into_sheet())?;
        println!("  (sheet updated)");
    }

    Ok(())
}

/// Render a face group with the pool's color; empty groups show as `-`.
fn colored_faces(kind: PoolKind, faces: &[u32]) -> String {
    if faces.is_empty() {
        return "-".to_string();
    }
    let values: Vec<String> = faces.iter().map(ToString::to_string).collect();
    let list = format!("[{}]", values.join(", "));
    match kind {
        PoolKind::Discipline => list.white().to_string(),
        PoolKind::Madness => list.red().to_string(),
        PoolKind::Exhaustion => list.bright_black().to_string(),
    }
}
