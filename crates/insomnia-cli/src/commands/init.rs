use std::path::Path;

use insomnia_mechanics::CharacterSheet;

use super::save_sheet;

/// Create a new sheet file with blank defaults and the given name.
pub fn run(name: &str, file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("{} already exists", file.display()));
    }

    let sheet = CharacterSheet {
        name: name.to_string(),
        ..CharacterSheet::default()
    };
    save_sheet(file, &sheet)?;

    println!("Created sheet for '{name}' at {}", file.display());
    println!("Run 'insomnia awake' to answer the questionnaire.");
    Ok(())
}
