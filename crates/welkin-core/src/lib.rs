pub mod constants;
pub mod math;
pub mod preset;

pub use preset::{Preset, PresetCatalog};
