//! Single source of truth for shared sky constants.
//! These values are used by the CPU evaluator and mirrored into shader
//! preambles by downstream render integrations.

/// Epsilon floor applied to every divisor in the lighting math.
/// Keeps degenerate geometry from producing NaN/Inf.
pub const DIV_EPSILON: f32 = 1e-5;

/// Half-width of the smoothed horizon band around `view.y == 0`.
/// Scattering returns exact black below `-HORIZON_FADE_BAND`.
pub const HORIZON_FADE_BAND: f32 = 0.02;

/// Height falloff rate substituting for Rayleigh optical-depth integration.
pub const RAYLEIGH_HEIGHT_FALLOFF: f32 = 4.0;

/// Height falloff rate substituting for Mie optical-depth integration.
pub const MIE_HEIGHT_FALLOFF: f32 = 2.0;

/// Reference wavelengths in nanometers for the three color channels.
pub const LAMBDA_RED: f32 = 680.0;
pub const LAMBDA_GREEN: f32 = 550.0;
pub const LAMBDA_BLUE: f32 = 440.0;

/// Clear-sky turbidity at which the Mie coefficient passes through unscaled.
pub const TURBIDITY_REFERENCE: f32 = 2.0;

/// Sun disc edge band (cosine of view/sun angle).
pub const SUN_DISC_INNER: f32 = 0.9998;
pub const SUN_DISC_OUTER: f32 = 0.9999;

/// Exponents for the sun corona and halo glow terms.
pub const SUN_CORONA_POWER: f32 = 200.0;
pub const SUN_HALO_POWER: f32 = 12.0;

/// Moon disc edge band. Slightly larger apparent size than the sun.
pub const MOON_DISC_INNER: f32 = 0.9996;
pub const MOON_DISC_OUTER: f32 = 0.9998;

/// Exponent for the moon glow term.
pub const MOON_GLOW_POWER: f32 = 100.0;

/// Celestial bodies fade out over this band below the horizon.
pub const CELESTIAL_FADE_BAND: f32 = 0.1;

/// Star grid scale for layer 0 and the per-layer increment.
pub const STAR_BASE_SCALE: f32 = 500.0;
pub const STAR_LAYER_SCALE_STEP: f32 = 300.0;

/// Per-layer star presence threshold: hash must exceed this for a cell
/// to contain a star.
pub const STAR_BASE_THRESHOLD: f32 = 0.95;
pub const STAR_THRESHOLD_STEP: f32 = 0.015;

/// Stars appear only while the sun is below this elevation, fading in
/// across `[-STAR_VISIBILITY_SUN_Y, STAR_VISIBILITY_SUN_Y]`.
pub const STAR_VISIBILITY_SUN_Y: f32 = 0.1;

/// Clouds are evaluated only above this view elevation.
pub const CLOUD_MIN_VIEW_Y: f32 = 0.1;

/// View elevation at which the cloud horizon fade reaches full strength.
pub const CLOUD_FADE_TOP_Y: f32 = 0.25;

/// Cloud plane drift per unit of animated time.
pub const CLOUD_DRIFT_RATE: f32 = 0.02;

/// Frequency scale applied to the projected cloud plane.
pub const CLOUD_PLANE_SCALE: f32 = 1.5;

/// Weight of the high-frequency wisp layer added to the base FBM.
pub const CLOUD_WISP_WEIGHT: f32 = 0.3;

/// Half-width of the soft coverage threshold band.
pub const CLOUD_EDGE_SOFTNESS: f32 = 0.1;

/// Overall cloud opacity multiplier before compositing.
pub const CLOUD_DENSITY: f32 = 0.8;

/// Compositor weight: clouds blend over the sky at `0.7 * alpha`.
pub const CLOUD_BLEND_WEIGHT: f32 = 0.7;

/// Default day/night animation speed (radians of sun sweep per time unit).
pub const DEFAULT_ANIMATION_SPEED: f32 = 0.1;

/// Peak sun elevation reached by the animated cycle, as a fraction of pi.
pub const ANIMATION_MAX_ELEVATION: f32 = 0.4;

/// Scale applied to the derived moon intensity while the sun is down.
pub const MOON_DERIVED_INTENSITY: f32 = 1.5;

/// Cloud coverage dips below its baseline by up to this much around
/// the horizon-crossing hours.
pub const COVERAGE_DAY_DIP: f32 = 0.2;

/// Documented parameter ranges. Setters clamp into these; the preset
/// validator reports violations.
pub const TURBIDITY_MIN: f32 = 1.0;
pub const TURBIDITY_MAX: f32 = 20.0;
pub const RAYLEIGH_MAX: f32 = 4.0;
pub const MIE_COEFF_MAX: f32 = 0.1;
pub const MIE_G_LIMIT: f32 = 0.999;
pub const MOON_INTENSITY_MAX: f32 = 2.0;

/// Quality auto-adjust hysteresis band, as fractions of the target FPS.
pub const FPS_DOWNGRADE_RATIO: f32 = 0.8;
pub const FPS_UPGRADE_RATIO: f32 = 0.95;

/// Frame rate the quality auto-adjust steers toward by default.
pub const TARGET_FPS: f32 = 60.0;

/// Default sun placement used when neither a preset nor the host
/// supplies one (degrees).
pub const DEFAULT_SUN_ELEVATION_DEG: f32 = 45.0;
pub const DEFAULT_SUN_AZIMUTH_DEG: f32 = 180.0;
