//! Analytic single-scattering approximation and the gradient fallback sky.
//!
//! No ray marching: optical depth along the view ray is replaced by a
//! height-based exponential falloff, which is what keeps the model cheap
//! enough to run per pixel on every tier above Low.

use glam::Vec3;
use std::f32::consts::PI;
use welkin_core::constants::{
    DIV_EPSILON, HORIZON_FADE_BAND, LAMBDA_BLUE, LAMBDA_GREEN, LAMBDA_RED, MIE_HEIGHT_FALLOFF,
    RAYLEIGH_HEIGHT_FALLOFF,
};
use welkin_core::math::smoothstep;

/// Day sky gradient colors, shared with the raster path defaults.
pub const DAY_ZENITH: Vec3 = Vec3::new(0.1, 0.15, 0.4);
pub const DAY_HORIZON: Vec3 = Vec3::new(0.5, 0.45, 0.35);

/// Night sky gradient colors.
pub const NIGHT_ZENITH: Vec3 = Vec3::new(0.015, 0.02, 0.05);
pub const NIGHT_HORIZON: Vec3 = Vec3::new(0.05, 0.06, 0.1);

/// Tint of the gradient-model sun glow.
pub const SUN_GLOW_COLOR: Vec3 = Vec3::new(1.0, 0.6, 0.3);

/// Rayleigh phase function: `0.75 * (1 + cos^2 theta)`.
pub fn rayleigh_phase(cos_theta: f32) -> f32 {
    0.75 * (1.0 + cos_theta * cos_theta)
}

/// Henyey-Greenstein phase function for Mie scattering.
pub fn henyey_greenstein_phase(cos_theta: f32, g: f32) -> f32 {
    let g2 = g * g;
    let denom = 4.0 * PI * (1.0 + g2 - 2.0 * g * cos_theta).max(0.0).powf(1.5);
    (1.0 - g2) / denom.max(DIV_EPSILON)
}

/// Per-channel Rayleigh weights from the `lambda^-4` law at the three
/// reference wavelengths, normalized to the green channel. This is the
/// term that separates blue skies from red sunsets.
pub fn rayleigh_spectrum() -> Vec3 {
    Vec3::new(
        (LAMBDA_GREEN / LAMBDA_RED).powi(4),
        1.0,
        (LAMBDA_GREEN / LAMBDA_BLUE).powi(4),
    )
}

/// Rayleigh + Mie single-scattering color for one view ray.
///
/// Returns exact black for rays below the smoothed horizon band; that is
/// a performance cutoff, not a physical boundary, and the caller is
/// expected to fall back to the gradient there.
pub fn scatter(
    view_dir: Vec3,
    sun_dir: Vec3,
    sun_intensity: f32,
    rayleigh_coeff: f32,
    mie_coeff: f32,
    mie_directional_g: f32,
) -> Vec3 {
    let horizon = smoothstep(-HORIZON_FADE_BAND, HORIZON_FADE_BAND, view_dir.y);
    if horizon <= 0.0 {
        return Vec3::ZERO;
    }

    let cos_theta = view_dir.dot(sun_dir);

    let rayleigh_depth = (-view_dir.y * RAYLEIGH_HEIGHT_FALLOFF).exp() * rayleigh_coeff;
    let mie_depth = (-view_dir.y * MIE_HEIGHT_FALLOFF).exp() * mie_coeff;

    let rayleigh_term = rayleigh_spectrum() * rayleigh_phase(cos_theta) * rayleigh_depth;
    let mie_term = Vec3::splat(henyey_greenstein_phase(cos_theta, mie_directional_g) * mie_depth);

    (rayleigh_term + mie_term) * sun_intensity * horizon
}

/// Gradient fallback sky: night/day zenith-to-horizon ramp plus a sun
/// glow lobe. Runs standalone at Low quality and underneath the
/// scattering blend elsewhere, so the two must agree at the horizon.
pub fn sky_gradient(view_dir: Vec3, sun_dir: Vec3) -> Vec3 {
    let daylight = smoothstep(-0.1, 0.25, sun_dir.y);
    let zenith = NIGHT_ZENITH.lerp(DAY_ZENITH, daylight);
    let horizon = NIGHT_HORIZON.lerp(DAY_HORIZON, daylight);

    // Squared elevation falloff reads more naturally than linear.
    let t = view_dir.y * 0.5 + 0.5;
    let base = horizon.lerp(zenith, t * t);

    let glow = view_dir.dot(sun_dir).max(0.0).powi(32) * daylight;
    base + SUN_GLOW_COLOR * glow
}
