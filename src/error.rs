//! Error types for QR symbol encoding

use crate::encoder::modes::Mode;
use crate::models::ECLevel;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, QrError>;

/// Everything that can go wrong while building a QR symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// Version outside 1..=40 (0 is only accepted by `create_symbol` as "auto")
    #[error("invalid version {0}: expected 1..=40")]
    InvalidVersion(u32),

    /// Mask pattern index outside 0..=7
    #[error("invalid mask pattern {0}: expected 0..=7")]
    InvalidMaskPattern(u8),

    /// The discrete log of zero is undefined in GF(256)
    #[error("log(0) is undefined in GF(256)")]
    LogOfZero,

    /// Polynomial division by the zero polynomial
    #[error("polynomial division by zero")]
    EmptyDivisor,

    /// Input text contains a character the chosen mode cannot encode
    #[error("illegal character {ch:?} for {mode} mode")]
    IllegalCharacter {
        /// Offending character
        ch: char,
        /// Mode that rejected it
        mode: Mode,
    },

    /// Packed data does not fit in any permitted version
    #[error("data needs {needed_bits} bits but only {capacity_bits} fit at level {level:?}")]
    CapacityExceeded {
        /// Bits the packed segments occupy
        needed_bits: usize,
        /// Bits available in the largest candidate version
        capacity_bits: usize,
        /// Requested error correction level
        level: ECLevel,
    },

    /// Unrecognized mode name
    #[error("invalid mode {0:?}: expected one of Numeric, Alphanumeric, Byte, Kanji")]
    InvalidMode(String),

    /// Unrecognized error correction level name
    #[error(
        "invalid error correction level {0:?}: expected one of L, M, Q, H, Low, Medium, Quartile, High"
    )]
    InvalidLevel(String),

    /// Module query outside the symbol
    #[error("module ({row}, {col}) is outside a {size}x{size} symbol")]
    OutOfBounds {
        /// Requested row
        row: i32,
        /// Requested column
        col: i32,
        /// Side length of the symbol
        size: usize,
    },

    /// The symbol has pending data and has not been made yet
    #[error("symbol has not been made; call make() first")]
    NotMade,
}

impl QrError {
    /// Programmer errors: bad version, level, mode or mask index, or bad
    /// field arithmetic input
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            QrError::InvalidVersion(_)
                | QrError::InvalidLevel(_)
                | QrError::InvalidMode(_)
                | QrError::InvalidMaskPattern(_)
                | QrError::LogOfZero
                | QrError::EmptyDivisor
        )
    }
}
