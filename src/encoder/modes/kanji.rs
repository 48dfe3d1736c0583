//! Kanji mode encoder (Mode 1000)
//! Shift-JIS double-byte characters, each packed into 13 bits
use super::Mode;
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{QrError, Result};
use encoding_rs::SHIFT_JIS;

/// Encode Kanji data
pub struct KanjiEncoder;

impl KanjiEncoder {
    /// Shift-JIS bytes of `text` when every character is a QR Kanji
    /// character, `None` otherwise
    pub fn valid_or_none(text: &str) -> Option<Vec<u8>> {
        let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
        if had_errors || bytes.len() % 2 != 0 {
            return None;
        }
        if !bytes
            .chunks_exact(2)
            .all(|pair| Self::is_kanji_pair(pair[0], pair[1]))
        {
            return None;
        }
        Some(bytes.into_owned())
    }

    /// Like [`valid_or_none`](Self::valid_or_none), naming the first offending character
    pub fn validate(text: &str) -> Result<Vec<u8>> {
        if let Some(sjis) = Self::valid_or_none(text) {
            return Ok(sjis);
        }
        let mut scratch = [0u8; 4];
        let ch = text
            .chars()
            .find(|c| Self::valid_or_none(c.encode_utf8(&mut scratch)).is_none())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Err(QrError::IllegalCharacter {
            ch,
            mode: Mode::Kanji,
        })
    }

    fn is_kanji_pair(high: u8, low: u8) -> bool {
        let code = u16::from_be_bytes([high, low]);
        (0x8140..=0x9FFC).contains(&code) || (0xE040..=0xEBBF).contains(&code)
    }

    /// Pack validated Shift-JIS pairs into `buffer`
    pub(crate) fn write(sjis: &[u8], buffer: &mut BitBuffer) {
        for pair in sjis.chunks_exact(2) {
            let code = u16::from_be_bytes([pair[0], pair[1]]) as u32;
            let shifted = if code <= 0x9FFC {
                code - 0x8140
            } else {
                code - 0xC140
            };
            let value = (shifted >> 8) * 0xC0 + (shifted & 0xFF);
            buffer.put(value, 13);
        }
    }
}
