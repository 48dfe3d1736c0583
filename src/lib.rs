//! rust_qr_gen - QR Code symbol encoder
//!
//! Turns text into a QR Code module grid: mode encoding, Reed-Solomon error
//! correction, block interleaving, function pattern placement and mask
//! selection. Rendering the grid to pixels is left to the caller.
//!
//! ```
//! use rust_qr_gen::{create_symbol, ECLevel};
//!
//! let mut symbol = create_symbol(0, ECLevel::M)?;
//! symbol.add_data("Hello world", None)?;
//! symbol.make()?;
//! assert_eq!(symbol.module_count(), Some(21));
//! assert!(symbol.is_dark(0, 0)?);
//! # Ok::<(), rust_qr_gen::QrError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding stages (modes, error correction, layout, masking)
pub mod encoder;
/// Error type shared by every stage
pub mod error;
/// Core data structures (Version, ECLevel, MaskPattern, ModuleGrid)
pub mod models;
/// The symbol builder
pub mod symbol;

pub use encoder::mask::PenaltyScore;
pub use encoder::modes::{Mode, Segment};
pub use error::{QrError, Result};
pub use models::{ECLevel, MaskPattern, ModuleGrid, Version};
pub use symbol::{Symbol, SymbolState};

/// Create an empty symbol
///
/// `version` 0 selects the smallest version that fits the data at `make`
/// time; 1..=40 pins it.
pub fn create_symbol(version: u32, level: ECLevel) -> Result<Symbol> {
    let version = match version {
        0 => None,
        v => Some(Version::new(v)?),
    };
    Ok(Symbol::new(version, level))
}
