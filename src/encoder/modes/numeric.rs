//! Numeric mode encoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use super::Mode;
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{QrError, Result};

/// Encode numeric data
pub struct NumericEncoder;

impl NumericEncoder {
    /// True when every character is an ASCII digit
    pub fn accepts(text: &str) -> bool {
        text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Reject the first non-digit
    pub fn validate(text: &str) -> Result<()> {
        match text.chars().find(|c| !c.is_ascii_digit()) {
            Some(ch) => Err(QrError::IllegalCharacter {
                ch,
                mode: Mode::Numeric,
            }),
            None => Ok(()),
        }
    }

    /// Pack validated digits into `buffer`
    pub(crate) fn write(text: &str, buffer: &mut BitBuffer) {
        for group in text.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buffer.put(value, bits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> BitBuffer {
        let mut buffer = BitBuffer::new();
        NumericEncoder::write(text, &mut buffer);
        buffer
    }

    #[test]
    fn test_numeric_group_sizes() {
        assert_eq!(encode("123").len(), 10);
        assert_eq!(encode("1234").len(), 14);
        assert_eq!(encode("12345").len(), 17);
    }

    #[test]
    fn test_numeric_encode() {
        // "01234567" -> 012 (0000001100), 345 (0101011001), 67 (1000011)
        let buffer = encode("01234567");
        assert_eq!(buffer.len(), 27);
        assert_eq!(buffer.to_bytes(), vec![0b0000_0011, 0b0001_0101, 0b1001_1000, 0b0110_0000]);
    }

    #[test]
    fn test_numeric_validate() {
        assert!(NumericEncoder::validate("0123456789").is_ok());
        assert_eq!(
            NumericEncoder::validate("12a"),
            Err(QrError::IllegalCharacter {
                ch: 'a',
                mode: Mode::Numeric
            })
        );
        assert!(!NumericEncoder::accepts("1 2"));
    }
}
