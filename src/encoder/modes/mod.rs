//! QR code data mode encoders
//!
//! This module contains encoders for the four QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits and nine symbols
//! - Byte: 8-bit data (UTF-8 text)
//! - Kanji: Shift-JIS double-byte characters, 13 bits each

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{QrError, Result};
use crate::models::Version;
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use kanji::KanjiEncoder;
use numeric::NumericEncoder;
use std::fmt;
use std::str::FromStr;

/// Data mode, carrying its 4-bit mode indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9, three per 10 bits
    Numeric,
    /// 45-symbol alphabet, two per 11 bits
    Alphanumeric,
    /// Raw UTF-8 bytes
    Byte,
    /// Shift-JIS double-byte characters, 13 bits each
    Kanji,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn bits(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character count field for this mode at `version`
    pub fn char_count_bits(&self, version: Version) -> usize {
        let range = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        let widths = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        widths[range]
    }

    /// Pick the most compact mode able to hold `text`
    ///
    /// Checked in order: numeric, alphanumeric, Kanji, then byte as fallback.
    pub fn detect(text: &str) -> Mode {
        if text.is_empty() {
            Mode::Byte
        } else if NumericEncoder::accepts(text) {
            Mode::Numeric
        } else if AlphanumericEncoder::accepts(text) {
            Mode::Alphanumeric
        } else if KanjiEncoder::valid_or_none(text).is_some() {
            Mode::Kanji
        } else {
            Mode::Byte
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Numeric => "Numeric",
            Mode::Alphanumeric => "Alphanumeric",
            Mode::Byte => "Byte",
            Mode::Kanji => "Kanji",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(Mode::Numeric),
            "alphanumeric" => Ok(Mode::Alphanumeric),
            "byte" => Ok(Mode::Byte),
            "kanji" => Ok(Mode::Kanji),
            _ => Err(QrError::InvalidMode(s.to_string())),
        }
    }
}

/// One run of input text encoded in a single mode
///
/// Only built through [`Segment::new`] or [`Segment::auto`], so the payload
/// always holds characters its mode can encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment(Payload);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Numeric(String),
    Alphanumeric(String),
    Byte(String),
    /// Source text plus its validated Shift-JIS pairs
    Kanji { text: String, sjis: Vec<u8> },
}

impl Segment {
    /// Validate `text` for `mode` and build the segment
    pub fn new(text: &str, mode: Mode) -> Result<Self> {
        let payload = match mode {
            Mode::Numeric => {
                NumericEncoder::validate(text)?;
                Payload::Numeric(text.to_string())
            }
            Mode::Alphanumeric => {
                AlphanumericEncoder::validate(text)?;
                Payload::Alphanumeric(text.to_string())
            }
            Mode::Byte => Payload::Byte(text.to_string()),
            Mode::Kanji => Payload::Kanji {
                text: text.to_string(),
                sjis: KanjiEncoder::validate(text)?,
            },
        };
        Ok(Segment(payload))
    }

    /// Segment in the best mode for `text`
    pub fn auto(text: &str) -> Result<Self> {
        Self::new(text, Mode::detect(text))
    }

    /// Mode the payload is packed in
    pub fn mode(&self) -> Mode {
        match &self.0 {
            Payload::Numeric(_) => Mode::Numeric,
            Payload::Alphanumeric(_) => Mode::Alphanumeric,
            Payload::Byte(_) => Mode::Byte,
            Payload::Kanji { .. } => Mode::Kanji,
        }
    }

    /// Source text as given by the caller
    pub fn text(&self) -> &str {
        match &self.0 {
            Payload::Numeric(text) | Payload::Alphanumeric(text) | Payload::Byte(text) => text,
            Payload::Kanji { text, .. } => text,
        }
    }

    /// Value written into the character count field
    pub fn char_count(&self) -> usize {
        match &self.0 {
            Payload::Numeric(text) | Payload::Alphanumeric(text) | Payload::Byte(text) => {
                text.len()
            }
            Payload::Kanji { sjis, .. } => sjis.len() / 2,
        }
    }

    /// Pack the segment payload (without mode and count headers)
    pub fn write(&self, buffer: &mut BitBuffer) {
        match &self.0 {
            Payload::Numeric(text) => NumericEncoder::write(text, buffer),
            Payload::Alphanumeric(text) => AlphanumericEncoder::write(text, buffer),
            Payload::Byte(text) => ByteEncoder::write(text.as_bytes(), buffer),
            Payload::Kanji { sjis, .. } => KanjiEncoder::write(sjis, buffer),
        }
    }
}
