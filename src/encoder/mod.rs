//! QR code encoding modules
//!
//! This module contains every stage between input text and a finished
//! module grid:
//! - Mode encoders and the bit buffer they pack into
//! - Capacity tables, Reed-Solomon parity and block interleaving
//! - Function pattern placement, data mapping and masking

/// Segment packing, padding and codeword interleaving
pub mod assembler;
/// BCH codes for format and version info
pub mod bch;
/// Append-only bit buffer
pub mod bit_buffer;
pub(crate) mod config;
/// Finder, alignment and timing patterns, format/version info
pub mod function_patterns;
/// GF(256) arithmetic
pub mod gf256;
/// Mask penalty scoring
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Zigzag codeword placement
pub mod placement;
/// Polynomials over GF(256) and RS generator polynomials
pub mod polynomial;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR specification tables (EC blocks, alignment positions, capacity)
pub mod tables;
