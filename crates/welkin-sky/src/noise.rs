//! Stateless hash and noise primitives for the procedural star and cloud
//! layers. Everything here is a pure function of its inputs; determinism
//! across repeated evaluations is a hard requirement for the star field.
//!
//! The hash formula is the widely used shader one-liner
//! `fract(sin(dot(p, k)) * 43758.5453)`. Changing the constants changes
//! the star/cloud layout deterministically but harmlessly.

use glam::{Vec2, Vec3};
use welkin_core::math::{fract, lerp};

const HASH_SCALE: f32 = 43758.5453;

/// Hash a 2D lattice point to a float in [0, 1).
pub fn hash12(p: Vec2) -> f32 {
    fract((p.dot(Vec2::new(12.9898, 78.233))).sin() * HASH_SCALE)
}

/// Hash a 3D cell index to a float in [0, 1).
pub fn hash13(p: Vec3) -> f32 {
    fract((p.dot(Vec3::new(12.9898, 78.233, 45.164))).sin() * HASH_SCALE)
}

/// Hash a 3D cell index to three independent floats in [0, 1).
pub fn hash33(p: Vec3) -> Vec3 {
    Vec3::new(
        fract((p.dot(Vec3::new(127.1, 311.7, 74.7))).sin() * HASH_SCALE),
        fract((p.dot(Vec3::new(269.5, 183.3, 246.1))).sin() * HASH_SCALE),
        fract((p.dot(Vec3::new(113.5, 271.9, 124.6))).sin() * HASH_SCALE),
    )
}

/// 2D value noise: hashed lattice values with smoothstep interpolation.
/// Returns a value in [0, 1].
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;

    let a = hash12(i);
    let b = hash12(i + Vec2::new(1.0, 0.0));
    let c = hash12(i + Vec2::new(0.0, 1.0));
    let d = hash12(i + Vec2::new(1.0, 1.0));

    let ux = f.x * f.x * (3.0 - 2.0 * f.x);
    let uy = f.y * f.y * (3.0 - 2.0 * f.y);

    lerp(lerp(a, b, ux), lerp(c, d, ux), uy)
}

/// Fractal Brownian motion: `octaves` layers of value noise, each at
/// double the frequency and half the amplitude of the last. Normalized
/// to [0, 1] regardless of octave count.
pub fn fbm(p: Vec2, octaves: u32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    let mut total = 0.0;

    for _ in 0..octaves {
        value += amplitude * value_noise(p * frequency);
        total += amplitude;
        frequency *= 2.0;
        amplitude *= 0.5;
    }

    value / total.max(f32::MIN_POSITIVE)
}
