//! Procedural sun disc, moon, and star field.
//!
//! Stars carry no persisted RNG state: presence, position, size,
//! brightness, twinkle, and tint all derive from hashes of the 3D grid
//! cell containing the view ray, so a fixed ray and animation time always
//! reproduce the same sky.

use glam::Vec3;
use std::f32::consts::TAU;
use welkin_core::constants::{
    CELESTIAL_FADE_BAND, MOON_DISC_INNER, MOON_DISC_OUTER, MOON_GLOW_POWER, STAR_BASE_SCALE,
    STAR_BASE_THRESHOLD, STAR_LAYER_SCALE_STEP, STAR_THRESHOLD_STEP, STAR_VISIBILITY_SUN_Y,
    SUN_CORONA_POWER, SUN_DISC_INNER, SUN_DISC_OUTER, SUN_HALO_POWER,
};
use welkin_core::math::smoothstep;

use crate::noise::{hash13, hash33};

const SUN_DISC_COLOR: Vec3 = Vec3::new(1.0, 0.98, 0.92);
const SUN_CORONA_COLOR: Vec3 = Vec3::new(1.0, 0.9, 0.7);
const SUN_HALO_COLOR: Vec3 = Vec3::new(1.0, 0.7, 0.4);
const MOON_COLOR: Vec3 = Vec3::new(0.9, 0.92, 1.0);

const STAR_COLOR_NEUTRAL: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const STAR_COLOR_BLUE: Vec3 = Vec3::new(0.75, 0.85, 1.0);
const STAR_COLOR_RED: Vec3 = Vec3::new(1.0, 0.82, 0.72);

/// Sun disc with corona and halo glow. Fades out as the sun drops below
/// the horizon.
pub fn sun_disc(view_dir: Vec3, sun_dir: Vec3, sun_intensity: f32) -> Vec3 {
    let visibility = smoothstep(-CELESTIAL_FADE_BAND, 0.0, sun_dir.y);
    if visibility <= 0.0 {
        return Vec3::ZERO;
    }

    let cos_theta = view_dir.dot(sun_dir);
    if cos_theta <= 0.0 {
        return Vec3::ZERO;
    }

    let disc = smoothstep(SUN_DISC_INNER, SUN_DISC_OUTER, cos_theta);
    // Limb darkening: the disc dims toward its edge.
    let limb = 0.6 + 0.4 * smoothstep(SUN_DISC_INNER, 1.0, cos_theta);
    let corona = cos_theta.powf(SUN_CORONA_POWER);
    let halo = cos_theta.powf(SUN_HALO_POWER);

    let color = SUN_DISC_COLOR * (disc * limb * 2.0)
        + SUN_CORONA_COLOR * (corona * 0.5)
        + SUN_HALO_COLOR * (halo * 0.08);

    color * sun_intensity * visibility
}

/// Moon phase in [0, 1] from the sun/moon geometry: 1 when the moon sits
/// opposite the sun (full), 0 when they coincide (new).
pub fn moon_phase(moon_dir: Vec3, sun_dir: Vec3) -> f32 {
    (1.0 - moon_dir.dot(sun_dir)) * 0.5
}

/// Moon disc with a phase-dependent brightness and a soft glow. Slightly
/// larger apparent size than the sun. Never fully dark: even a new moon
/// keeps a 0.2 brightness floor.
pub fn moon(view_dir: Vec3, moon_dir: Vec3, sun_dir: Vec3, moon_intensity: f32) -> Vec3 {
    let visibility = smoothstep(-CELESTIAL_FADE_BAND, 0.0, moon_dir.y);
    if visibility <= 0.0 || moon_intensity <= 0.0 {
        return Vec3::ZERO;
    }

    let cos_theta = view_dir.dot(moon_dir);
    if cos_theta <= 0.0 {
        return Vec3::ZERO;
    }

    let brightness = moon_phase(moon_dir, sun_dir) * 0.8 + 0.2;
    let disc = smoothstep(MOON_DISC_INNER, MOON_DISC_OUTER, cos_theta);
    let glow = cos_theta.powf(MOON_GLOW_POWER);

    MOON_COLOR * (disc + glow * 0.15) * brightness * moon_intensity * visibility
}

/// Multi-layer hashed star field with per-star sinusoidal twinkle.
///
/// Each layer partitions the sky into a 3D grid; a cell hash above the
/// layer threshold places one star in that cell. The 27-cell neighborhood
/// walk keeps stars near cell boundaries from popping.
pub fn starfield(
    view_dir: Vec3,
    sun_dir: Vec3,
    star_intensity: f32,
    animated_time: f32,
    layers: u32,
) -> Vec3 {
    if star_intensity <= 0.0 {
        return Vec3::ZERO;
    }

    // Stars only appear once the sun is low enough, fading in across the
    // dusk band.
    let visibility = smoothstep(STAR_VISIBILITY_SUN_Y, -STAR_VISIBILITY_SUN_Y, sun_dir.y);
    if visibility <= 0.0 {
        return Vec3::ZERO;
    }

    let mut total = Vec3::ZERO;

    for layer in 0..layers {
        let scale = STAR_BASE_SCALE + layer as f32 * STAR_LAYER_SCALE_STEP;
        let threshold = STAR_BASE_THRESHOLD + layer as f32 * STAR_THRESHOLD_STEP;

        let p = view_dir * scale;
        let base_cell = p.floor();

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                for dz in -1i32..=1 {
                    let cell = base_cell + Vec3::new(dx as f32, dy as f32, dz as f32);

                    if hash13(cell) <= threshold {
                        continue;
                    }

                    let star_pos = cell + hash33(cell);
                    let dist = (p - star_pos).length();

                    let traits = hash33(cell + Vec3::splat(7.31));
                    let size = 0.4 + 0.6 * traits.x;
                    if dist >= size {
                        continue;
                    }

                    let brightness = 0.5 + 0.5 * traits.y;
                    let twinkle_freq = 2.0 + 4.0 * traits.z;
                    let twinkle_phase = hash13(cell + Vec3::splat(3.17)) * TAU;
                    let twinkle =
                        0.7 + 0.3 * (animated_time * twinkle_freq + twinkle_phase).sin();

                    let tint_pick = hash13(cell + Vec3::splat(11.73));
                    let tint = if tint_pick < 0.6 {
                        STAR_COLOR_NEUTRAL
                    } else if tint_pick < 0.8 {
                        STAR_COLOR_BLUE
                    } else {
                        STAR_COLOR_RED
                    };

                    let core = smoothstep(size, 0.0, dist);
                    total += tint * (core * brightness * twinkle);
                }
            }
        }
    }

    total * star_intensity * visibility
}
