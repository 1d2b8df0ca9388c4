pub mod builtin;
pub mod loader;
pub mod validator;

pub use builtin::{builtin_catalog, BUILTIN_PRESET_NAMES};
pub use loader::{catalog_with, load_all_presets, load_presets_from_str, LoadError};
pub use validator::{validate_presets, ValidationError};
