//! The shared sky parameter set and its packed GPU form.
//!
//! `SkyParameters` is owned exclusively by the controller; evaluation
//! reads a snapshot and never writes back. `time_of_day` is derived from
//! the sun direction on every sun write and has no independent setter.

use glam::Vec3;
use welkin_core::constants::{DEFAULT_SUN_AZIMUTH_DEG, DEFAULT_SUN_ELEVATION_DEG};
use welkin_core::math::direction_from_degrees;

use crate::quality::QualityLevel;

/// Feature flag bits in [`SkyUniforms::feature_flags`].
pub const FLAG_STARS: u32 = 1 << 0;
pub const FLAG_CLOUDS: u32 = 1 << 1;
pub const FLAG_MOON: u32 = 1 << 2;
pub const FLAG_SUN_DISC: u32 = 1 << 3;

/// Full parameter set driving sky evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyParameters {
    /// Unit direction toward the sun. Renormalized after every write.
    pub sun_direction: Vec3,
    pub sun_intensity: f32,
    /// Unit direction toward the moon.
    pub moon_direction: Vec3,
    /// Moon brightness in [0, 2].
    pub moon_intensity: f32,
    /// Atmospheric haziness in [1, 20]. Scales the effective Mie term.
    pub turbidity: f32,
    /// Rayleigh strength in [0, 4].
    pub rayleigh_coeff: f32,
    /// Mie strength in [0, 0.1].
    pub mie_coeff: f32,
    /// Henyey-Greenstein asymmetry in (-1, 1).
    pub mie_directional_g: f32,
    /// Normalized sun height: `(sun_direction.y + 1) / 2`. Derived.
    pub time_of_day: f32,
    /// Cloud opacity threshold control in [0, 1].
    pub cloud_coverage: f32,
    /// Star brightness in [0, 1].
    pub star_intensity: f32,
    /// Monotonic clock supplied by the host; drives twinkle and drift.
    pub animated_time: f32,
    pub enable_stars: bool,
    pub enable_clouds: bool,
    pub enable_moon: bool,
    pub enable_sun_disc: bool,
    pub quality: QualityLevel,
}

impl Default for SkyParameters {
    fn default() -> Self {
        let sun_direction =
            direction_from_degrees(DEFAULT_SUN_ELEVATION_DEG, DEFAULT_SUN_AZIMUTH_DEG);
        Self {
            sun_direction,
            sun_intensity: 1.0,
            moon_direction: -sun_direction,
            moon_intensity: 0.5,
            turbidity: 2.0,
            rayleigh_coeff: 1.0,
            mie_coeff: 0.005,
            mie_directional_g: 0.8,
            time_of_day: (sun_direction.y + 1.0) * 0.5,
            cloud_coverage: 0.2,
            star_intensity: 0.5,
            animated_time: 0.0,
            enable_stars: true,
            enable_clouds: true,
            enable_moon: true,
            enable_sun_disc: true,
            quality: QualityLevel::Medium,
        }
    }
}

impl SkyParameters {
    /// Pack into the GPU uniform layout.
    pub fn to_uniforms(&self) -> SkyUniforms {
        let mut flags = 0u32;
        if self.enable_stars {
            flags |= FLAG_STARS;
        }
        if self.enable_clouds {
            flags |= FLAG_CLOUDS;
        }
        if self.enable_moon {
            flags |= FLAG_MOON;
        }
        if self.enable_sun_disc {
            flags |= FLAG_SUN_DISC;
        }
        SkyUniforms {
            sun_direction: self.sun_direction.to_array(),
            sun_intensity: self.sun_intensity,
            moon_direction: self.moon_direction.to_array(),
            moon_intensity: self.moon_intensity,
            turbidity: self.turbidity,
            rayleigh_coeff: self.rayleigh_coeff,
            mie_coeff: self.mie_coeff,
            mie_directional_g: self.mie_directional_g,
            time_of_day: self.time_of_day,
            cloud_coverage: self.cloud_coverage,
            star_intensity: self.star_intensity,
            animated_time: self.animated_time,
            feature_flags: flags,
            quality_level: self.quality.index(),
            _padding: [0; 2],
        }
    }
}

/// Sky uniform block (80 bytes, five 16-byte rows, matching the WGSL
/// SkyUniforms layout).
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyUniforms {
    pub sun_direction: [f32; 3],
    pub sun_intensity: f32,
    pub moon_direction: [f32; 3],
    pub moon_intensity: f32,
    pub turbidity: f32,
    pub rayleigh_coeff: f32,
    pub mie_coeff: f32,
    pub mie_directional_g: f32,
    pub time_of_day: f32,
    pub cloud_coverage: f32,
    pub star_intensity: f32,
    pub animated_time: f32,
    pub feature_flags: u32,
    pub quality_level: u32,
    pub _padding: [u32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky_uniforms_size() {
        assert_eq!(std::mem::size_of::<SkyUniforms>(), 80);
    }

    #[test]
    fn test_default_directions_are_unit() {
        let p = SkyParameters::default();
        assert!((p.sun_direction.length() - 1.0).abs() < 1e-5);
        assert!((p.moon_direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_default_time_of_day_matches_sun() {
        let p = SkyParameters::default();
        let expected = (p.sun_direction.y + 1.0) * 0.5;
        assert!((p.time_of_day - expected).abs() < 1e-6);
    }

    #[test]
    fn test_flag_packing() {
        let mut p = SkyParameters::default();
        p.enable_stars = true;
        p.enable_clouds = false;
        p.enable_moon = true;
        p.enable_sun_disc = false;
        let u = p.to_uniforms();
        assert_eq!(u.feature_flags & FLAG_STARS, FLAG_STARS);
        assert_eq!(u.feature_flags & FLAG_CLOUDS, 0);
        assert_eq!(u.feature_flags & FLAG_MOON, FLAG_MOON);
        assert_eq!(u.feature_flags & FLAG_SUN_DISC, 0);
    }

    #[test]
    fn test_uniforms_mirror_parameters() {
        let mut p = SkyParameters::default();
        p.turbidity = 7.5;
        p.quality = QualityLevel::High;
        p.animated_time = 42.0;
        let u = p.to_uniforms();
        assert_eq!(u.turbidity, 7.5);
        assert_eq!(u.quality_level, 2);
        assert_eq!(u.animated_time, 42.0);
        assert_eq!(u.sun_direction, p.sun_direction.to_array());
    }
}
