/// Tri-state module grid
pub mod matrix;
/// Version, error correction level and mask pattern
pub mod params;

pub use matrix::ModuleGrid;
pub use params::{ECLevel, MaskPattern, Version};
