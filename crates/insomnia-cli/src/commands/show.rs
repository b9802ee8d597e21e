use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use insomnia_mechanics::Track;

use super::load_sheet;

/// Print the character sheet.
pub fn run(file: &Path) -> Result<(), String> {
    let sheet = load_sheet(file)?;

    let title = if sheet.name.is_empty() {
        "(unnamed)".to_string()
    } else {
        sheet.name.clone()
    };
    println!("{title}");
    if !sheet.role.is_empty() {
        println!("  {}", sheet.role);
    }
    println!();

    let mut attributes = Table::new();
    attributes.set_content_arrangement(ContentArrangement::Dynamic);
    attributes.set_header(vec!["Attribute", "Value", ""]);
    for (label, track) in [
        ("Discipline", &sheet.discipline),
        ("Madness", &sheet.madness),
        ("Exhaustion", &sheet.exhaustion),
    ] {
        attributes.add_row(vec![label.to_string(), track.to_string(), pips(track)]);
    }
    println!("{attributes}");

    println!();
    println!(
        "  Reactions: fight {} / flight {}",
        sheet.reactions.fight, sheet.reactions.flight
    );
    if !sheet.madness_skill.is_empty() {
        println!("  Madness skill: {}", sheet.madness_skill);
    }
    if !sheet.exhaustion_talent.is_empty() {
        println!("  Exhaustion talent: {}", sheet.exhaustion_talent);
    }

    for (label, text) in [
        ("What keeps me up", &sheet.what_keeps_me_up),
        ("What just happened", &sheet.what_just_happened),
        ("Appearance", &sheet.appearance),
        ("Who I really am", &sheet.who_i_really_am),
        ("My path", &sheet.path),
    ] {
        if !text.is_empty() {
            println!("  {label}: {text}");
        }
    }

    if !sheet.inventory.is_empty() {
        println!();
        println!("  Inventory:");
        for item in &sheet.inventory {
            if item.description.is_empty() {
                println!("    - {}", item.name);
            } else {
                println!("    - {}: {}", item.name, item.description);
            }
        }
    }

    if !sheet.scars.is_empty() {
        println!();
        println!("  Scars:");
        for scar in &sheet.scars {
            println!("    - {scar}");
        }
    }

    Ok(())
}

/// Render a track as filled and empty boxes.
fn pips(track: &Track) -> String {
    track
        .boxes()
        .into_iter()
        .map(|filled| if filled { '\u{25cf}' } else { '\u{25cb}' })
        .collect()
}
