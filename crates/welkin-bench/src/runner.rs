use std::time::Instant;

use glam::Vec3;
use welkin_core::constants::TARGET_FPS;
use welkin_sky::{auto_adjust_quality, evaluate, QualityLevel, SkyConfig, SkyController};

use crate::scenes::SceneConfig;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl TimingSeries {
    /// Summarize raw per-frame timings. `samples` must be non-empty.
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        samples.sort_by(|a, b| a.total_cmp(b));
        let n = samples.len();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let pick = |q: f64| samples[((n as f64 * q) as usize).min(n - 1)];
        Self {
            mean_ms: mean,
            median_ms: pick(0.5),
            p95_ms: pick(0.95),
            p99_ms: pick(0.99),
            min_ms: samples[0],
            max_ms: samples[n - 1],
        }
    }
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub width: u32,
    pub height: u32,
    pub frame_count: u32,
    pub timings: TimingSeries,
}

/// Times full-frame CPU sky evaluation. This is the cost model behind
/// the FPS-driven quality adjustment: a tier that cannot hold the frame
/// budget here will not hold it on the GPU path either.
pub struct BenchmarkRunner {
    width: u32,
    height: u32,
    frame_count: u32,
}

impl BenchmarkRunner {
    pub fn new(width: u32, height: u32, frame_count: u32) -> Self {
        Self {
            width,
            height,
            frame_count,
        }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> BenchmarkResult {
        log::info!(
            "Running scene '{}' ({}x{}, {} frames)...",
            config.name,
            self.width,
            self.height,
            self.frame_count
        );

        let mut sky = SkyController::new(SkyConfig {
            preset: Some(config.preset.to_string()),
            quality_level: Some(config.quality),
            ..SkyConfig::default()
        });

        let mut samples = Vec::with_capacity(self.frame_count as usize);
        let mut checksum = 0.0f32;

        for frame in 0..self.frame_count {
            // Advance the cycle a little each frame so twinkle and drift
            // paths stay hot.
            sky.animate(config.time + frame as f32 * 0.016);
            let params = sky.snapshot();

            let start = Instant::now();
            for y in 0..self.height {
                for x in 0..self.width {
                    let view = Self::frame_ray(x, y, self.width, self.height);
                    checksum += evaluate(&params, view).x;
                }
            }
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }

        // Keep the evaluation loop from being optimized out.
        log::debug!("scene '{}' checksum {checksum}", config.name);

        let timings = TimingSeries::from_samples(samples);

        // What the quality policy would do with this frame time. CPU
        // evaluation is slower than the raster path, so this is a cost
        // model, not a shipping decision.
        let implied_fps = (1000.0 / timings.median_ms.max(0.001)) as f32;
        let tier = QualityLevel::from_index(config.quality);
        let adjusted = auto_adjust_quality(tier, implied_fps, TARGET_FPS);
        if adjusted != tier {
            log::info!(
                "scene '{}': {implied_fps:.1} fps implies {adjusted:?} (from {tier:?})",
                config.name
            );
        }

        BenchmarkResult {
            scene_name: config.name.to_string(),
            width: self.width,
            height: self.height,
            frame_count: self.frame_count,
            timings,
        }
    }

    /// Map a pixel to an upper-hemisphere view ray: a simple dome
    /// parameterization, azimuth across the width and elevation up the
    /// height.
    fn frame_ray(x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let azimuth = (x as f32 + 0.5) / width as f32 * std::f32::consts::TAU;
        let elevation = (y as f32 + 0.5) / height as f32 * std::f32::consts::FRAC_PI_2;
        Vec3::new(
            elevation.cos() * azimuth.cos(),
            elevation.sin(),
            elevation.cos() * azimuth.sin(),
        )
    }
}
