use std::collections::HashSet;
use thiserror::Error;
use welkin_core::constants::{
    MIE_COEFF_MAX, MIE_G_LIMIT, MOON_INTENSITY_MAX, RAYLEIGH_MAX, TURBIDITY_MAX, TURBIDITY_MIN,
};
use welkin_core::preset::Preset;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duplicate preset name '{0}'")]
    DuplicateName(String),
    #[error("Preset '{name}' turbidity {value} outside [{min}, {max}]")]
    TurbidityOutOfRange {
        name: String,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("Preset '{name}' rayleigh {value} outside [0, {max}]")]
    RayleighOutOfRange { name: String, value: f32, max: f32 },
    #[error("Preset '{name}' mie_coefficient {value} outside [0, {max}]")]
    MieOutOfRange { name: String, value: f32, max: f32 },
    #[error("Preset '{name}' mie_directional_g {value} outside (-1, 1)")]
    MieGOutOfRange { name: String, value: f32 },
    #[error("Preset '{name}' {field} {value} is negative")]
    NegativeIntensity {
        name: String,
        field: &'static str,
        value: f32,
    },
    #[error("Preset '{name}' cloud_coverage {value} outside [0, 1]")]
    CoverageOutOfRange { name: String, value: f32 },
    #[error("Preset '{name}' star_intensity {value} outside [0, 1]")]
    StarIntensityOutOfRange { name: String, value: f32 },
    #[error("Preset '{name}' moon_intensity {value} outside [0, {max}]")]
    MoonIntensityOutOfRange { name: String, value: f32, max: f32 },
}

/// Validate a preset list against the documented parameter ranges.
///
/// The controller clamps on application regardless; validation exists so
/// that authoring mistakes in user RON surface as errors instead of being
/// silently squashed into range.
pub fn validate_presets(presets: &[Preset]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_names = HashSet::new();
    for preset in presets {
        if !seen_names.insert(preset.name.as_str()) {
            errors.push(ValidationError::DuplicateName(preset.name.clone()));
        }
    }

    for preset in presets {
        let name = &preset.name;
        if let Some(t) = preset.turbidity {
            if !(TURBIDITY_MIN..=TURBIDITY_MAX).contains(&t) {
                errors.push(ValidationError::TurbidityOutOfRange {
                    name: name.clone(),
                    value: t,
                    min: TURBIDITY_MIN,
                    max: TURBIDITY_MAX,
                });
            }
        }
        if let Some(r) = preset.rayleigh {
            if !(0.0..=RAYLEIGH_MAX).contains(&r) {
                errors.push(ValidationError::RayleighOutOfRange {
                    name: name.clone(),
                    value: r,
                    max: RAYLEIGH_MAX,
                });
            }
        }
        if let Some(m) = preset.mie_coefficient {
            if !(0.0..=MIE_COEFF_MAX).contains(&m) {
                errors.push(ValidationError::MieOutOfRange {
                    name: name.clone(),
                    value: m,
                    max: MIE_COEFF_MAX,
                });
            }
        }
        if let Some(g) = preset.mie_directional_g {
            if g.abs() > MIE_G_LIMIT {
                errors.push(ValidationError::MieGOutOfRange {
                    name: name.clone(),
                    value: g,
                });
            }
        }
        if let Some(s) = preset.sun_intensity {
            if s < 0.0 {
                errors.push(ValidationError::NegativeIntensity {
                    name: name.clone(),
                    field: "sun_intensity",
                    value: s,
                });
            }
        }
        if let Some(c) = preset.cloud_coverage {
            if !(0.0..=1.0).contains(&c) {
                errors.push(ValidationError::CoverageOutOfRange {
                    name: name.clone(),
                    value: c,
                });
            }
        }
        if let Some(s) = preset.star_intensity {
            if !(0.0..=1.0).contains(&s) {
                errors.push(ValidationError::StarIntensityOutOfRange {
                    name: name.clone(),
                    value: s,
                });
            }
        }
        if let Some(m) = preset.moon_intensity {
            if !(0.0..=MOON_INTENSITY_MAX).contains(&m) {
                errors.push(ValidationError::MoonIntensityOutOfRange {
                    name: name.clone(),
                    value: m,
                    max: MOON_INTENSITY_MAX,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
