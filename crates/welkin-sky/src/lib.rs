pub mod celestial;
pub mod clouds;
pub mod controller;
pub mod evaluate;
pub mod noise;
pub mod params;
pub mod quality;
pub mod scatter;

pub use controller::{SkyConfig, SkyController};
pub use evaluate::{evaluate, evaluate_rgba};
pub use params::{SkyParameters, SkyUniforms};
pub use quality::{auto_adjust_quality, QualityLevel};
