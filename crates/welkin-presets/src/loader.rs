use thiserror::Error;
use welkin_core::preset::{Preset, PresetCatalog};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse presets RON: {0}")]
    PresetParseError(String),
}

/// Parse a RON string into a list of presets.
///
/// Fields omitted from a preset stay `None` and are skipped when the
/// preset is applied.
pub fn load_presets_from_str(ron_str: &str) -> Result<Vec<Preset>, LoadError> {
    let options = ron::Options::default();
    let presets: Vec<Preset> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::PresetParseError(e.to_string()))?;
    log::info!("Loaded {} sky presets", presets.len());
    Ok(presets)
}

/// Load and merge multiple preset sources into one list.
pub fn load_all_presets(sources: &[&str]) -> Result<Vec<Preset>, LoadError> {
    let mut all_presets = Vec::new();
    for source in sources {
        all_presets.extend(load_presets_from_str(source)?);
    }
    Ok(all_presets)
}

/// Build a catalog from the builtins extended with user presets.
/// A user preset with a builtin name replaces that builtin in the copy;
/// the shared builtin catalog itself is never touched.
pub fn catalog_with(user_presets: Vec<Preset>) -> PresetCatalog {
    let mut catalog = crate::builtin::builtin_catalog().clone();
    for preset in user_presets {
        catalog.insert(preset);
    }
    catalog
}
