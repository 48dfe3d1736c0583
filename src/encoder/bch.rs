//! BCH codes for QR code format and version info
use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const G15: u32 = 0b101_0011_0111;
/// XOR mask applied to format info so it is never all zero
const G15_MASK: u32 = 0b101_0100_0001_0010;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const G18: u32 = 0b1_1111_0010_0101;

/// BCH encoder for the two metadata fields
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format info for a level and mask pattern
    pub fn format_bits(level: ECLevel, mask: MaskPattern) -> u32 {
        let data = ((level.format_bits() as u32) << 3) | mask.index() as u32;
        ((data << 10) | Self::remainder(data << 10, G15)) ^ G15_MASK
    }

    /// 18-bit version info (versions 7+)
    pub fn version_bits(version: Version) -> u32 {
        let data = version.number() as u32;
        (data << 12) | Self::remainder(data << 12, G18)
    }

    fn remainder(mut value: u32, generator: u32) -> u32 {
        let generator_degree = Self::degree(generator);
        while Self::degree(value) >= generator_degree {
            value ^= generator << (Self::degree(value) - generator_degree);
        }
        value
    }

    /// Number of significant bits
    fn degree(value: u32) -> u32 {
        u32::BITS - value.leading_zeros()
    }
}
