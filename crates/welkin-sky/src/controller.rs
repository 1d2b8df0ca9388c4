//! Host-side sky controller: owns the parameter set, enforces the
//! derived-field invariants on every write, and drives the day/night
//! animation.
//!
//! All operations are synchronous. The contract with the evaluator is
//! single-writer/immediately-consistent-readers: one `animate` or setter
//! call completes before the next evaluation pass reads the snapshot,
//! which sequential execution gives for free.

use glam::Vec3;
use std::f32::consts::PI;
use welkin_core::constants::{
    ANIMATION_MAX_ELEVATION, COVERAGE_DAY_DIP, DEFAULT_ANIMATION_SPEED, DEFAULT_SUN_AZIMUTH_DEG,
    DEFAULT_SUN_ELEVATION_DEG, MIE_COEFF_MAX, MIE_G_LIMIT, MOON_DERIVED_INTENSITY,
    MOON_INTENSITY_MAX, RAYLEIGH_MAX, TURBIDITY_MAX, TURBIDITY_MIN,
};
use welkin_core::math::{direction_from_degrees, direction_from_radians, direction_from_spherical};
use welkin_core::preset::Preset;
use welkin_presets::builtin_catalog;

use crate::params::{SkyParameters, SkyUniforms};
use crate::quality::QualityLevel;

/// Construction options. Unset fields fall back to the CLEAR_DAY preset,
/// then to the hardcoded parameter defaults.
#[derive(Debug, Clone, Default)]
pub struct SkyConfig {
    /// Name of a builtin preset applied before the explicit overrides.
    pub preset: Option<String>,
    pub quality_level: Option<i32>,
    /// Initial sun placement in degrees.
    pub sun_elevation: Option<f32>,
    pub sun_azimuth: Option<f32>,
    pub turbidity: Option<f32>,
    pub rayleigh: Option<f32>,
    pub mie_coefficient: Option<f32>,
    pub mie_directional_g: Option<f32>,
    pub sun_intensity: Option<f32>,
    pub cloud_coverage: Option<f32>,
    pub star_intensity: Option<f32>,
    pub moon_intensity: Option<f32>,
    pub enable_stars: Option<bool>,
    pub enable_clouds: Option<bool>,
    pub enable_moon: Option<bool>,
    pub enable_sun_disc: Option<bool>,
}

/// Stateful owner of [`SkyParameters`].
pub struct SkyController {
    params: SkyParameters,
    /// Coverage baseline set by the host. `animate` perturbs the visible
    /// coverage around this without compounding across frames.
    cloud_coverage_base: f32,
}

impl Default for SkyController {
    fn default() -> Self {
        Self::new(SkyConfig::default())
    }
}

impl SkyController {
    pub fn new(config: SkyConfig) -> Self {
        let mut controller = Self {
            params: SkyParameters::default(),
            cloud_coverage_base: SkyParameters::default().cloud_coverage,
        };

        // CLEAR_DAY seeds everything a preset can carry; a requested
        // preset then overrides it, then the explicit fields win.
        controller.apply_named_preset("CLEAR_DAY");
        if let Some(name) = &config.preset {
            controller.apply_preset(name);
        }

        if let Some(q) = config.quality_level {
            controller.set_quality(q);
        }
        let overrides = Preset {
            turbidity: config.turbidity,
            rayleigh: config.rayleigh,
            mie_coefficient: config.mie_coefficient,
            mie_directional_g: config.mie_directional_g,
            sun_intensity: config.sun_intensity,
            cloud_coverage: config.cloud_coverage,
            star_intensity: config.star_intensity,
            moon_intensity: config.moon_intensity,
            enable_stars: config.enable_stars,
            enable_clouds: config.enable_clouds,
            enable_moon: config.enable_moon,
            enable_sun_disc: config.enable_sun_disc,
            ..Preset::named("config-overrides")
        };
        controller.apply_custom(&overrides);

        controller.set_sun_position(
            config.sun_elevation.unwrap_or(DEFAULT_SUN_ELEVATION_DEG),
            config.sun_azimuth.unwrap_or(DEFAULT_SUN_AZIMUTH_DEG),
        );

        controller
    }

    /// Place the sun from elevation/azimuth in degrees and recompute the
    /// derived time of day.
    pub fn set_sun_position(&mut self, elevation_deg: f32, azimuth_deg: f32) {
        self.write_sun_direction(direction_from_degrees(elevation_deg, azimuth_deg));
    }

    /// Place the sun from polar/azimuthal spherical coordinates in
    /// radians. The radius is normalized away.
    pub fn set_sun_from_spherical(&mut self, _radius: f32, phi: f32, theta: f32) {
        self.write_sun_direction(direction_from_spherical(phi, theta));
    }

    /// Place the moon; optionally update its intensity (clamped to
    /// [0, 2]).
    pub fn set_moon_position(
        &mut self,
        elevation_deg: f32,
        azimuth_deg: f32,
        intensity: Option<f32>,
    ) {
        self.params.moon_direction = direction_from_degrees(elevation_deg, azimuth_deg);
        if let Some(i) = intensity {
            self.params.moon_intensity = i.clamp(0.0, MOON_INTENSITY_MAX);
        }
    }

    /// Advance the day/night cycle to `time` at the default speed.
    pub fn animate(&mut self, time: f32) {
        self.animate_with_speed(time, DEFAULT_ANIMATION_SPEED);
    }

    /// Advance the day/night cycle to `time`.
    ///
    /// The sun runs a circular path: elevation `sin(angle) * pi * 0.4`,
    /// azimuth `angle`, one revolution per `2 pi / speed` time units.
    /// The moon mirrors it (antipodal placement) with a derived intensity
    /// that is zero whenever the sun is up. Idempotent per `time`;
    /// non-monotonic times are legal and simply move the sky backward.
    pub fn animate_with_speed(&mut self, time: f32, speed: f32) {
        let angle = time * speed;
        let sun_elevation = angle.sin() * PI * ANIMATION_MAX_ELEVATION;
        let sun_azimuth = angle;

        self.write_sun_direction(direction_from_radians(sun_elevation, sun_azimuth));
        self.params.moon_direction = direction_from_radians(-sun_elevation, sun_azimuth + PI);
        self.params.moon_intensity =
            (-sun_elevation.sin()).max(0.0) * MOON_DERIVED_INTENSITY;

        // Perturb coverage around the host baseline; clamped at zero.
        let dip = (self.params.time_of_day * PI).sin() * COVERAGE_DAY_DIP;
        self.params.cloud_coverage = (self.cloud_coverage_base - dip).max(0.0);

        self.params.animated_time = time;
    }

    /// Clamp and set the quality tier.
    pub fn set_quality(&mut self, level: i32) {
        self.params.quality = QualityLevel::from_index(level);
    }

    /// Clamp and set cloud coverage; also resets the animation baseline.
    pub fn set_cloud_coverage(&mut self, coverage: f32) {
        let clamped = coverage.clamp(0.0, 1.0);
        self.params.cloud_coverage = clamped;
        self.cloud_coverage_base = clamped;
    }

    pub fn set_stars_enabled(&mut self, enabled: bool) {
        self.params.enable_stars = enabled;
    }

    pub fn set_clouds_enabled(&mut self, enabled: bool) {
        self.params.enable_clouds = enabled;
    }

    pub fn set_moon_enabled(&mut self, enabled: bool) {
        self.params.enable_moon = enabled;
    }

    pub fn set_sun_disc_enabled(&mut self, enabled: bool) {
        self.params.enable_sun_disc = enabled;
    }

    /// Apply a builtin preset by name. An unknown name is a warned no-op,
    /// never an error.
    pub fn apply_preset(&mut self, name: &str) {
        if !self.apply_named_preset(name) {
            log::warn!("unknown sky preset '{name}', ignoring");
        }
    }

    fn apply_named_preset(&mut self, name: &str) -> bool {
        match builtin_catalog().get(name) {
            Some(preset) => {
                self.apply_custom(preset);
                true
            }
            None => false,
        }
    }

    /// Partially apply any preset, e.g. one loaded from user RON. Only
    /// fields the preset defines are touched; values are clamped into
    /// their documented ranges.
    pub fn apply_custom(&mut self, preset: &Preset) {
        let p = &mut self.params;
        if let Some(t) = preset.turbidity {
            p.turbidity = t.clamp(TURBIDITY_MIN, TURBIDITY_MAX);
        }
        if let Some(r) = preset.rayleigh {
            p.rayleigh_coeff = r.clamp(0.0, RAYLEIGH_MAX);
        }
        if let Some(m) = preset.mie_coefficient {
            p.mie_coeff = m.clamp(0.0, MIE_COEFF_MAX);
        }
        if let Some(g) = preset.mie_directional_g {
            p.mie_directional_g = g.clamp(-MIE_G_LIMIT, MIE_G_LIMIT);
        }
        if let Some(s) = preset.sun_intensity {
            p.sun_intensity = s.max(0.0);
        }
        if let Some(c) = preset.cloud_coverage {
            let clamped = c.clamp(0.0, 1.0);
            p.cloud_coverage = clamped;
            self.cloud_coverage_base = clamped;
        }
        if let Some(s) = preset.star_intensity {
            p.star_intensity = s.clamp(0.0, 1.0);
        }
        if let Some(m) = preset.moon_intensity {
            p.moon_intensity = m.clamp(0.0, MOON_INTENSITY_MAX);
        }
        if let Some(e) = preset.enable_stars {
            p.enable_stars = e;
        }
        if let Some(e) = preset.enable_clouds {
            p.enable_clouds = e;
        }
        if let Some(e) = preset.enable_moon {
            p.enable_moon = e;
        }
        if let Some(e) = preset.enable_sun_disc {
            p.enable_sun_disc = e;
        }
    }

    /// Non-aliasing snapshot of the current parameters.
    pub fn snapshot(&self) -> SkyParameters {
        self.params
    }

    /// Packed uniform block for GPU upload.
    pub fn uniforms(&self) -> SkyUniforms {
        self.params.to_uniforms()
    }

    fn write_sun_direction(&mut self, direction: Vec3) {
        // Primary field and its derived field update together so no
        // caller can observe a stale time_of_day.
        self.params.sun_direction = direction.normalize();
        self.params.time_of_day = (self.params.sun_direction.y + 1.0) * 0.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_set_sun_position_unit_and_derived() {
        let mut sky = SkyController::default();
        for e in [-90.0f32, -45.0, -10.0, 0.0, 30.0, 72.0, 90.0] {
            sky.set_sun_position(e, 123.0);
            let p = sky.snapshot();
            assert!((p.sun_direction.length() - 1.0).abs() < EPS);
            let expected = (e.to_radians().sin() + 1.0) * 0.5;
            assert!(
                (p.time_of_day - expected).abs() < EPS,
                "time_of_day {} vs {expected} at e = {e}",
                p.time_of_day
            );
        }
    }

    #[test]
    fn test_set_sun_from_spherical_normalizes_radius() {
        let mut a = SkyController::default();
        let mut b = SkyController::default();
        a.set_sun_from_spherical(1.0, 0.8, 2.1);
        b.set_sun_from_spherical(4000.0, 0.8, 2.1);
        assert!((a.snapshot().sun_direction - b.snapshot().sun_direction).length() < EPS);
    }

    #[test]
    fn test_set_moon_position_clamps_intensity() {
        let mut sky = SkyController::default();
        sky.set_moon_position(20.0, 45.0, Some(5.0));
        assert_eq!(sky.snapshot().moon_intensity, 2.0);
        sky.set_moon_position(20.0, 45.0, Some(-1.0));
        assert_eq!(sky.snapshot().moon_intensity, 0.0);
        // No intensity argument leaves the old value alone.
        sky.set_moon_position(50.0, 90.0, None);
        assert_eq!(sky.snapshot().moon_intensity, 0.0);
        assert!((sky.snapshot().moon_direction.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cloud_coverage_clamping_idempotent() {
        let mut sky = SkyController::default();
        for (input, expected) in [(1.7f32, 1.0f32), (-0.3, 0.0), (0.42, 0.42)] {
            sky.set_cloud_coverage(input);
            assert_eq!(sky.snapshot().cloud_coverage, expected);
            // Re-applying the clamped value is a fixed point.
            sky.set_cloud_coverage(expected);
            assert_eq!(sky.snapshot().cloud_coverage, expected);
        }
    }

    #[test]
    fn test_animate_directions_unit() {
        let mut sky = SkyController::default();
        for i in 0..50 {
            let t = i as f32 * 1.37;
            sky.animate_with_speed(t, 0.1);
            let p = sky.snapshot();
            assert!((p.sun_direction.length() - 1.0).abs() < EPS);
            assert!((p.moon_direction.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_animate_moon_antipodal() {
        let mut sky = SkyController::default();
        for i in 0..60 {
            let t = i as f32 * 0.73;
            sky.animate_with_speed(t, 0.25);
            let p = sky.snapshot();
            assert!(
                (p.moon_direction.y + p.sun_direction.y).abs() < EPS,
                "moon.y {} vs sun.y {} at t = {t}",
                p.moon_direction.y,
                p.sun_direction.y
            );
            // Opposite azimuth: horizontal components point the other way.
            let sun_az = p.sun_direction.z.atan2(p.sun_direction.x);
            let moon_az = p.moon_direction.z.atan2(p.moon_direction.x);
            let diff = (moon_az - sun_az).rem_euclid(std::f32::consts::TAU);
            assert!(
                (diff - PI).abs() < 1e-3,
                "azimuth delta {diff} at t = {t}"
            );
        }
    }

    #[test]
    fn test_animate_moon_dark_while_sun_up() {
        let mut sky = SkyController::default();
        for i in 0..200 {
            let t = i as f32 * 0.31;
            sky.animate(t);
            let p = sky.snapshot();
            if p.sun_direction.y >= 0.0 {
                assert_eq!(
                    p.moon_intensity, 0.0,
                    "moon lit at t = {t} with sun.y = {}",
                    p.sun_direction.y
                );
            }
        }
    }

    #[test]
    fn test_animate_idempotent_per_time() {
        let mut sky = SkyController::default();
        sky.animate(17.3);
        let first = sky.snapshot();
        sky.animate(17.3);
        assert_eq!(sky.snapshot(), first);
        // Moving backward in time is legal.
        sky.animate(2.0);
        sky.animate(17.3);
        assert_eq!(sky.snapshot(), first);
    }

    #[test]
    fn test_animate_coverage_does_not_compound() {
        let mut sky = SkyController::default();
        sky.set_cloud_coverage(0.5);
        // Repeated animate calls at the same time must not walk coverage
        // away from the baseline.
        sky.animate(5.0);
        let once = sky.snapshot().cloud_coverage;
        for _ in 0..100 {
            sky.animate(5.0);
        }
        assert_eq!(sky.snapshot().cloud_coverage, once);
        assert!(once <= 0.5);
    }

    #[test]
    fn test_animate_sets_animated_time() {
        let mut sky = SkyController::default();
        sky.animate(88.25);
        assert_eq!(sky.snapshot().animated_time, 88.25);
    }

    #[test]
    fn test_quality_clamps() {
        let mut sky = SkyController::default();
        sky.set_quality(-3);
        assert_eq!(sky.snapshot().quality, QualityLevel::Low);
        sky.set_quality(7);
        assert_eq!(sky.snapshot().quality, QualityLevel::High);
        sky.set_quality(1);
        assert_eq!(sky.snapshot().quality, QualityLevel::Medium);
    }

    #[test]
    fn test_apply_overcast_is_partial() {
        let mut sky = SkyController::default();
        sky.set_moon_position(33.0, 210.0, Some(1.2));
        let moon_before = sky.snapshot().moon_direction;

        sky.apply_preset("OVERCAST");
        let p = sky.snapshot();
        assert!(!p.enable_sun_disc);
        // Moon direction is not a preset field; it must be untouched.
        assert_eq!(p.moon_direction, moon_before);
    }

    #[test]
    fn test_apply_unknown_preset_is_noop() {
        let mut sky = SkyController::default();
        sky.set_sun_position(12.0, 271.0);
        sky.set_cloud_coverage(0.33);
        let before = sky.snapshot();
        sky.apply_preset("DOES_NOT_EXIST");
        assert_eq!(sky.snapshot(), before);
    }

    #[test]
    fn test_night_preset_construction() {
        let sky = SkyController::new(SkyConfig {
            preset: Some("NIGHT".into()),
            ..SkyConfig::default()
        });
        let p = sky.snapshot();
        assert!(!p.enable_clouds);
        assert!(!p.enable_sun_disc);
        assert_eq!(p.star_intensity, 1.0);
        assert_eq!(p.moon_intensity, 1.5);
        assert_eq!(p.turbidity, 1.0);
        assert_eq!(p.sun_intensity, 0.1);
    }

    #[test]
    fn test_config_overrides_beat_preset() {
        let sky = SkyController::new(SkyConfig {
            preset: Some("NIGHT".into()),
            star_intensity: Some(0.25),
            quality_level: Some(2),
            sun_elevation: Some(-10.0),
            sun_azimuth: Some(45.0),
            ..SkyConfig::default()
        });
        let p = sky.snapshot();
        assert_eq!(p.star_intensity, 0.25);
        assert_eq!(p.quality, QualityLevel::High);
        let expected_tod = ((-10.0f32).to_radians().sin() + 1.0) * 0.5;
        assert!((p.time_of_day - expected_tod).abs() < EPS);
    }

    #[test]
    fn test_config_overrides_are_clamped() {
        let sky = SkyController::new(SkyConfig {
            turbidity: Some(100.0),
            cloud_coverage: Some(-2.0),
            moon_intensity: Some(9.0),
            ..SkyConfig::default()
        });
        let p = sky.snapshot();
        assert_eq!(p.turbidity, 20.0);
        assert_eq!(p.cloud_coverage, 0.0);
        assert_eq!(p.moon_intensity, 2.0);
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut sky = SkyController::default();
        let snap = sky.snapshot();
        sky.set_sun_position(-60.0, 10.0);
        assert_ne!(snap.sun_direction, sky.snapshot().sun_direction);
    }

    #[test]
    fn test_toggles() {
        let mut sky = SkyController::default();
        sky.set_stars_enabled(false);
        sky.set_clouds_enabled(false);
        sky.set_moon_enabled(false);
        sky.set_sun_disc_enabled(false);
        let p = sky.snapshot();
        assert!(!p.enable_stars && !p.enable_clouds && !p.enable_moon && !p.enable_sun_disc);
    }
}
