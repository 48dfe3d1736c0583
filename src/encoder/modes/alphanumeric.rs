//! Alphanumeric mode encoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use super::Mode;
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{QrError, Result};

/// Encode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Code of `ch` in the 45-symbol alphabet
    pub fn code(ch: char) -> Option<u32> {
        match ch {
            '0'..='9' => Some(ch as u32 - '0' as u32),
            'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
            ' ' => Some(36),
            '$' => Some(37),
            '%' => Some(38),
            '*' => Some(39),
            '+' => Some(40),
            '-' => Some(41),
            '.' => Some(42),
            '/' => Some(43),
            ':' => Some(44),
            _ => None,
        }
    }

    /// Whether every character is in the alphabet
    pub fn accepts(text: &str) -> bool {
        text.chars().all(|c| Self::code(c).is_some())
    }

    /// Reject the first character outside the alphabet
    pub fn validate(text: &str) -> Result<()> {
        match text.chars().find(|&c| Self::code(c).is_none()) {
            Some(ch) => Err(QrError::IllegalCharacter {
                ch,
                mode: Mode::Alphanumeric,
            }),
            None => Ok(()),
        }
    }

    /// Pack validated text into `buffer`
    pub(crate) fn write(text: &str, buffer: &mut BitBuffer) {
        let codes: Vec<u32> = text.chars().filter_map(Self::code).collect();
        for pair in codes.chunks(2) {
            match *pair {
                [a, b] => buffer.put(a * 45 + b, 11),
                [a] => buffer.put(a, 6),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_codes() {
        assert_eq!(AlphanumericEncoder::code('0'), Some(0));
        assert_eq!(AlphanumericEncoder::code('Z'), Some(35));
        assert_eq!(AlphanumericEncoder::code(' '), Some(36));
        assert_eq!(AlphanumericEncoder::code(':'), Some(44));
        assert_eq!(AlphanumericEncoder::code('a'), None);
    }

    #[test]
    fn test_alphanumeric_encode() {
        // "A1" = (10 * 45 + 1) = 451 = 0b00111000011 (11 bits)
        let mut buffer = BitBuffer::new();
        AlphanumericEncoder::write("A1", &mut buffer);
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer.to_bytes(), vec![0b0011_1000, 0b0110_0000]);
    }

    #[test]
    fn test_alphanumeric_odd_length() {
        // "HELLO WORLD": 5 pairs + 1 trailing char
        let mut buffer = BitBuffer::new();
        AlphanumericEncoder::write("HELLO WORLD", &mut buffer);
        assert_eq!(buffer.len(), 5 * 11 + 6);
    }

    #[test]
    fn test_alphanumeric_rejects_lowercase() {
        assert_eq!(
            AlphanumericEncoder::validate("Hello"),
            Err(QrError::IllegalCharacter {
                ch: 'e',
                mode: Mode::Alphanumeric
            })
        );
    }
}
