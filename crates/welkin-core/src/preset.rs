use serde::{Deserialize, Serialize};

/// A named, immutable bundle of sky parameter overrides.
///
/// Every value field is optional: applying a preset touches only the fields
/// it defines and leaves the rest of the parameter set alone. `Some(0.0)`
/// and `Some(false)` are real values, not "absent" — partial application
/// must never treat them as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Catalog lookup key, e.g. "CLEAR_DAY".
    pub name: String,
    #[serde(default)]
    pub turbidity: Option<f32>,
    #[serde(default)]
    pub rayleigh: Option<f32>,
    #[serde(default)]
    pub mie_coefficient: Option<f32>,
    #[serde(default)]
    pub mie_directional_g: Option<f32>,
    #[serde(default)]
    pub sun_intensity: Option<f32>,
    #[serde(default)]
    pub cloud_coverage: Option<f32>,
    #[serde(default)]
    pub star_intensity: Option<f32>,
    #[serde(default)]
    pub moon_intensity: Option<f32>,
    #[serde(default)]
    pub enable_stars: Option<bool>,
    #[serde(default)]
    pub enable_clouds: Option<bool>,
    #[serde(default)]
    pub enable_moon: Option<bool>,
    #[serde(default)]
    pub enable_sun_disc: Option<bool>,
}

impl Preset {
    /// An empty preset that applies nothing.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.into(),
            turbidity: None,
            rayleigh: None,
            mie_coefficient: None,
            mie_directional_g: None,
            sun_intensity: None,
            cloud_coverage: None,
            star_intensity: None,
            moon_intensity: None,
            enable_stars: None,
            enable_clouds: None,
            enable_moon: None,
            enable_sun_disc: None,
        }
    }
}

/// Collection of presets indexed by name.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    pub presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Look up a preset by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Insert a preset, replacing any existing preset with the same name.
    pub fn insert(&mut self, preset: Preset) {
        if let Some(existing) = self.presets.iter_mut().find(|p| p.name == preset.name) {
            *existing = preset;
        } else {
            self.presets.push(preset);
        }
    }

    /// Preset names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
