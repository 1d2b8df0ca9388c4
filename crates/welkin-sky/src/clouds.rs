//! Procedural cloud layer: FBM density on a projected horizontal plane,
//! thresholded by coverage and composited over the sky color.

use glam::{Vec2, Vec3};
use welkin_core::constants::{
    CLOUD_DENSITY, CLOUD_DRIFT_RATE, CLOUD_EDGE_SOFTNESS, CLOUD_FADE_TOP_Y, CLOUD_MIN_VIEW_Y,
    CLOUD_PLANE_SCALE, CLOUD_WISP_WEIGHT,
};
use welkin_core::math::smoothstep;

use crate::noise::fbm;

const CLOUD_ALBEDO: Vec3 = Vec3::new(1.0, 0.98, 0.95);
const MOONLIGHT_TINT: Vec3 = Vec3::new(0.6, 0.7, 0.9);

/// Octave count of the high-frequency wisp detail layer.
const WISP_OCTAVES: u32 = 3;

/// One cloud evaluation: opacity in [0, 1] and the lit cloud color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudSample {
    pub alpha: f32,
    pub color: Vec3,
}

impl CloudSample {
    pub const CLEAR: Self = Self {
        alpha: 0.0,
        color: Vec3::ZERO,
    };
}

/// Sample the cloud layer along one view ray.
///
/// Rays at or below `CLOUD_MIN_VIEW_Y` skip the layer entirely; the
/// plane projection degenerates toward the horizon and the horizon fade
/// would zero the result anyway.
pub fn sample_clouds(
    view_dir: Vec3,
    sun_dir: Vec3,
    moon_dir: Vec3,
    moon_intensity: f32,
    coverage: f32,
    animated_time: f32,
    octaves: u32,
) -> CloudSample {
    if view_dir.y <= CLOUD_MIN_VIEW_Y || coverage <= 0.0 {
        return CloudSample::CLEAR;
    }

    // Project onto the cloud plane. The divisor floor guards the grazing
    // angles that slip past the elevation gate.
    let plane = Vec2::new(view_dir.x, view_dir.z) / view_dir.y.max(0.1) * CLOUD_PLANE_SCALE;
    let drift = Vec2::new(animated_time, animated_time * 0.5) * CLOUD_DRIFT_RATE;

    let base = fbm(plane + drift, octaves);
    let wisp = fbm(plane * 3.0 + drift * 2.0, WISP_OCTAVES);

    // Remap the weighted sum back into [0, 1].
    let combined = (base + wisp * CLOUD_WISP_WEIGHT) / (1.0 + CLOUD_WISP_WEIGHT);

    let threshold = 1.0 - coverage;
    let shape = smoothstep(
        threshold - CLOUD_EDGE_SOFTNESS,
        threshold + CLOUD_EDGE_SOFTNESS,
        combined,
    );

    let horizon_fade = smoothstep(CLOUD_MIN_VIEW_Y, CLOUD_FADE_TOP_Y, view_dir.y);
    let alpha = (shape * CLOUD_DENSITY * horizon_fade).clamp(0.0, 1.0);

    let sun_lit = (sun_dir.y + 0.5).max(0.3);
    let moon_lit = moon_intensity * moon_dir.y.max(0.0) * 0.25;
    let color = CLOUD_ALBEDO * sun_lit + MOONLIGHT_TINT * moon_lit;

    CloudSample { alpha, color }
}
