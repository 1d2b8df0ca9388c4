//! Builtin sky presets. Defined at process start, never mutated.
//! User catalogs extend a copy; the builtins themselves are shared
//! process-wide.

use std::sync::OnceLock;
use welkin_core::preset::{Preset, PresetCatalog};

/// Names of the builtin presets, in catalog order.
pub const BUILTIN_PRESET_NAMES: [&str; 5] =
    ["CLEAR_DAY", "OVERCAST", "SUNSET", "NIGHT", "HAZY_SUMMER"];

fn clear_day() -> Preset {
    Preset {
        turbidity: Some(2.0),
        rayleigh: Some(1.0),
        mie_coefficient: Some(0.005),
        mie_directional_g: Some(0.8),
        sun_intensity: Some(1.0),
        cloud_coverage: Some(0.2),
        star_intensity: Some(0.5),
        moon_intensity: Some(0.5),
        enable_stars: Some(true),
        enable_clouds: Some(true),
        enable_moon: Some(true),
        enable_sun_disc: Some(true),
        ..Preset::named("CLEAR_DAY")
    }
}

fn overcast() -> Preset {
    Preset {
        turbidity: Some(10.0),
        rayleigh: Some(2.0),
        mie_coefficient: Some(0.05),
        mie_directional_g: Some(0.7),
        sun_intensity: Some(0.4),
        cloud_coverage: Some(0.9),
        star_intensity: Some(0.0),
        moon_intensity: Some(0.2),
        enable_stars: Some(false),
        enable_clouds: Some(true),
        enable_moon: Some(false),
        enable_sun_disc: Some(false),
        ..Preset::named("OVERCAST")
    }
}

fn sunset() -> Preset {
    Preset {
        turbidity: Some(6.0),
        rayleigh: Some(2.5),
        mie_coefficient: Some(0.02),
        mie_directional_g: Some(0.9),
        sun_intensity: Some(0.8),
        cloud_coverage: Some(0.35),
        star_intensity: Some(0.2),
        moon_intensity: Some(0.4),
        enable_stars: Some(true),
        enable_clouds: Some(true),
        enable_moon: Some(true),
        enable_sun_disc: Some(true),
        ..Preset::named("SUNSET")
    }
}

fn night() -> Preset {
    Preset {
        turbidity: Some(1.0),
        rayleigh: Some(0.5),
        mie_coefficient: Some(0.002),
        mie_directional_g: Some(0.8),
        sun_intensity: Some(0.1),
        cloud_coverage: Some(0.1),
        star_intensity: Some(1.0),
        moon_intensity: Some(1.5),
        enable_stars: Some(true),
        enable_clouds: Some(false),
        enable_moon: Some(true),
        enable_sun_disc: Some(false),
        ..Preset::named("NIGHT")
    }
}

fn hazy_summer() -> Preset {
    Preset {
        turbidity: Some(15.0),
        rayleigh: Some(1.2),
        mie_coefficient: Some(0.03),
        mie_directional_g: Some(0.65),
        sun_intensity: Some(0.9),
        cloud_coverage: Some(0.4),
        star_intensity: Some(0.3),
        moon_intensity: Some(0.5),
        enable_stars: Some(true),
        enable_clouds: Some(true),
        enable_moon: Some(true),
        enable_sun_disc: Some(true),
        ..Preset::named("HAZY_SUMMER")
    }
}

/// The builtin catalog, built once per process.
pub fn builtin_catalog() -> &'static PresetCatalog {
    static CATALOG: OnceLock<PresetCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| PresetCatalog {
        presets: vec![clear_day(), overcast(), sunset(), night(), hazy_summer()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_presets;

    #[test]
    fn test_all_builtin_names_resolve() {
        let catalog = builtin_catalog();
        for name in BUILTIN_PRESET_NAMES {
            assert!(catalog.get(name).is_some(), "missing builtin {name}");
        }
        assert_eq!(catalog.len(), BUILTIN_PRESET_NAMES.len());
    }

    #[test]
    fn test_builtin_presets_define_every_field() {
        // Builtins are complete bundles; only user presets may be partial.
        for p in &builtin_catalog().presets {
            assert!(p.turbidity.is_some(), "{} missing turbidity", p.name);
            assert!(p.rayleigh.is_some(), "{} missing rayleigh", p.name);
            assert!(p.mie_coefficient.is_some(), "{} missing mie", p.name);
            assert!(p.mie_directional_g.is_some(), "{} missing g", p.name);
            assert!(p.sun_intensity.is_some(), "{} missing sun", p.name);
            assert!(p.cloud_coverage.is_some(), "{} missing coverage", p.name);
            assert!(p.star_intensity.is_some(), "{} missing stars", p.name);
            assert!(p.moon_intensity.is_some(), "{} missing moon", p.name);
            assert!(p.enable_stars.is_some(), "{} missing star flag", p.name);
            assert!(p.enable_clouds.is_some(), "{} missing cloud flag", p.name);
            assert!(p.enable_moon.is_some(), "{} missing moon flag", p.name);
            assert!(p.enable_sun_disc.is_some(), "{} missing disc flag", p.name);
        }
    }

    #[test]
    fn test_builtin_presets_validate() {
        assert!(validate_presets(&builtin_catalog().presets).is_ok());
    }

    #[test]
    fn test_night_preset_values() {
        let night = builtin_catalog().get("NIGHT").unwrap();
        assert_eq!(night.enable_clouds, Some(false));
        assert_eq!(night.enable_sun_disc, Some(false));
        assert_eq!(night.star_intensity, Some(1.0));
        assert_eq!(night.moon_intensity, Some(1.5));
        assert_eq!(night.turbidity, Some(1.0));
        assert_eq!(night.sun_intensity, Some(0.1));
    }

    #[test]
    fn test_overcast_disables_sun_disc() {
        let overcast = builtin_catalog().get("OVERCAST").unwrap();
        assert_eq!(overcast.enable_sun_disc, Some(false));
        assert_eq!(overcast.enable_stars, Some(false));
    }
}
