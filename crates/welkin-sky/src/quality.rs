use welkin_core::constants::{FPS_DOWNGRADE_RATIO, FPS_UPGRADE_RATIO};

/// Discrete rendering fidelity tier. Strictly ordered; there are no other
/// states or transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum QualityLevel {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
}

impl QualityLevel {
    /// Convert an arbitrary integer level, clamping into [0, 2].
    pub fn from_index(index: i32) -> Self {
        match index.clamp(0, 2) {
            0 => QualityLevel::Low,
            1 => QualityLevel::Medium,
            _ => QualityLevel::High,
        }
    }

    /// Index form for GPU uniforms and host config.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Low quality skips the scattering model entirely and renders the
    /// gradient sky alone.
    pub fn uses_scattering(self) -> bool {
        !matches!(self, QualityLevel::Low)
    }

    /// FBM octave count for the cloud layer.
    pub fn cloud_octaves(self) -> u32 {
        match self {
            QualityLevel::Low => 3,
            QualityLevel::Medium => 4,
            QualityLevel::High => 5,
        }
    }

    /// Number of star grid layers evaluated.
    pub fn star_layers(self) -> u32 {
        match self {
            QualityLevel::Low => 1,
            QualityLevel::Medium => 2,
            QualityLevel::High => 3,
        }
    }

    /// One step down, saturating at Low.
    pub fn lower(self) -> Self {
        match self {
            QualityLevel::Low | QualityLevel::Medium => QualityLevel::Low,
            QualityLevel::High => QualityLevel::Medium,
        }
    }

    /// One step up, saturating at High.
    pub fn higher(self) -> Self {
        match self {
            QualityLevel::Low => QualityLevel::Medium,
            QualityLevel::Medium | QualityLevel::High => QualityLevel::High,
        }
    }
}

/// Frame-rate-driven quality adjustment.
///
/// A coarse hysteresis band rather than a controller: well under target
/// steps down, close to target steps up, the gap between holds steady.
/// The host decides when to call this, typically once per measurement
/// window; the core never invokes it on its own.
pub fn auto_adjust_quality(
    current: QualityLevel,
    current_fps: f32,
    target_fps: f32,
) -> QualityLevel {
    if current_fps < FPS_DOWNGRADE_RATIO * target_fps {
        current.lower()
    } else if current_fps > FPS_UPGRADE_RATIO * target_fps {
        current.higher()
    } else {
        current
    }
}
