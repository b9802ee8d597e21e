pub mod awake;
pub mod init;
pub mod roll;
pub mod show;

use std::path::Path;

use insomnia_mechanics::CharacterSheet;

/// Load a character sheet from a JSON file.
pub fn load_sheet(path: &Path) -> Result<CharacterSheet, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid sheet {}: {e}", path.display()))
}

/// Save a character sheet as pretty-printed JSON.
pub fn save_sheet(path: &Path, sheet: &CharacterSheet) -> Result<(), String> {
    let data = serde_json::to_string_pretty(sheet)
        .map_err(|e| format!("cannot serialize sheet: {e}"))?;
    std::fs::write(path, data).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
