use glam::Vec3;

/// Hermite smoothstep. The clamp form also handles reversed edges
/// (`edge0 > edge1`), which the fade gates rely on.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part, matching the GLSL `fract` convention (always in [0,1)).
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Linear interpolation between two scalars.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Unit direction from elevation/azimuth in degrees.
/// Elevation 90 points straight up; azimuth sweeps around the horizon.
pub fn direction_from_degrees(elevation_deg: f32, azimuth_deg: f32) -> Vec3 {
    let e = elevation_deg.to_radians();
    let a = azimuth_deg.to_radians();
    direction_from_radians(e, a)
}

/// Unit direction from elevation/azimuth in radians.
pub fn direction_from_radians(elevation: f32, azimuth: f32) -> Vec3 {
    Vec3::new(
        elevation.cos() * azimuth.cos(),
        elevation.sin(),
        elevation.cos() * azimuth.sin(),
    )
    .normalize()
}

/// Unit direction from polar/azimuthal spherical coordinates (radians).
/// `phi` is measured from the +Y axis. The radius of the source sphere is
/// normalized away by construction.
pub fn direction_from_spherical(phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
    .normalize()
}
