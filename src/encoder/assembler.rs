//! Data assembly: segments -> padded data codewords -> EC blocks -> final
//! interleaved codeword stream
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::Segment;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::{BlockPlan, block_plan};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};
use tracing::debug;

const PAD0: u32 = 0xEC;
const PAD1: u32 = 0x11;

/// Write mode indicator, character count and payload of every segment
pub fn pack_segments(version: Version, segments: &[Segment]) -> BitBuffer {
    let mut buffer = BitBuffer::new();
    for segment in segments {
        let mode = segment.mode();
        buffer.put(mode.bits(), 4);
        buffer.put(segment.char_count() as u32, mode.char_count_bits(version));
        segment.write(&mut buffer);
    }
    buffer
}

/// Smallest version whose data capacity holds all segments
pub fn select_version(level: ECLevel, segments: &[Segment]) -> Result<Version> {
    let mut last = (0, 0);
    for version in Version::all() {
        let capacity_bits = block_plan(version, level).data_capacity_bits();
        let needed_bits = pack_segments(version, segments).len();
        if needed_bits <= capacity_bits {
            debug!(
                version = version.number(),
                needed_bits, capacity_bits, "selected version"
            );
            return Ok(version);
        }
        last = (needed_bits, capacity_bits);
    }
    Err(QrError::CapacityExceeded {
        needed_bits: last.0,
        capacity_bits: last.1,
        level,
    })
}

/// Pack, pad and error-correct `segments` into the final codeword order
pub fn create_codewords(version: Version, level: ECLevel, segments: &[Segment]) -> Result<Vec<u8>> {
    let plan = block_plan(version, level);
    let data = pad_data(version, level, segments, plan)?;
    let codewords = interleave_blocks(&data, plan)?;
    debug!(
        version = version.number(),
        ?level,
        blocks = plan.blocks.len(),
        data_codewords = plan.total_data_codewords,
        ecc_codewords = plan.total_ecc_codewords,
        "assembled codewords"
    );
    Ok(codewords)
}

/// Data codewords: segments, terminator, bit padding, then alternating pad bytes
fn pad_data(
    version: Version,
    level: ECLevel,
    segments: &[Segment],
    plan: &BlockPlan,
) -> Result<Vec<u8>> {
    let mut buffer = pack_segments(version, segments);
    let capacity_bits = plan.data_capacity_bits();
    if buffer.len() > capacity_bits {
        return Err(QrError::CapacityExceeded {
            needed_bits: buffer.len(),
            capacity_bits,
            level,
        });
    }

    // Terminator only when all four bits fit
    if buffer.len() + 4 <= capacity_bits {
        buffer.put(0, 4);
    }
    while buffer.len() % 8 != 0 {
        buffer.put_bit(false);
    }
    for pad in [PAD0, PAD1].into_iter().cycle() {
        if buffer.len() >= capacity_bits {
            break;
        }
        buffer.put(pad, 8);
    }
    Ok(buffer.to_bytes())
}

/// Split data across blocks, append RS parity and interleave column-wise
fn interleave_blocks(data: &[u8], plan: &BlockPlan) -> Result<Vec<u8>> {
    let mut data_blocks = Vec::with_capacity(plan.blocks.len());
    let mut ecc_blocks = Vec::with_capacity(plan.blocks.len());

    let mut offset = 0;
    for block in &plan.blocks {
        let chunk = &data[offset..offset + block.data_codewords];
        offset += block.data_codewords;
        let encoder = ReedSolomonEncoder::new(block.ecc_codewords());
        ecc_blocks.push(encoder.encode(chunk)?);
        data_blocks.push(chunk);
    }

    let mut result = Vec::with_capacity(plan.total_data_codewords + plan.total_ecc_codewords);
    for i in 0..plan.max_data_codewords {
        result.extend(data_blocks.iter().filter_map(|b| b.get(i)));
    }
    for i in 0..plan.max_ecc_codewords {
        result.extend(ecc_blocks.iter().filter_map(|b| b.get(i)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::modes::Mode;
    use crate::encoder::tables::total_codewords;

    fn v(n: u32) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_hello_world_1q_codewords() {
        let segments = vec![Segment::new("HELLO WORLD", Mode::Alphanumeric).unwrap()];
        let codewords = create_codewords(v(1), ECLevel::Q, &segments).unwrap();
        assert_eq!(
            codewords,
            vec![
                32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, // data
                168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16, // ecc
            ]
        );
    }

    #[test]
    fn test_byte_mode_header_and_padding() {
        let segments = vec![Segment::new("Hello world", Mode::Byte).unwrap()];
        let codewords = create_codewords(v(1), ECLevel::M, &segments).unwrap();
        assert_eq!(codewords.len(), 26);
        // 0100 00001011 'H'...: mode + count straddle the first bytes
        assert_eq!(&codewords[..3], &[0x40, 0xB4, 0x86]);
        // 100 bits of data + terminator -> 13 bytes, then pads
        assert_eq!(&codewords[13..16], &[0xEC, 0x11, 0xEC]);
    }

    #[test]
    fn test_empty_symbol_is_all_padding() {
        let codewords = create_codewords(v(1), ECLevel::H, &[]).unwrap();
        assert_eq!(&codewords[..3], &[0x00, 0xEC, 0x11]);
        assert_eq!(codewords.len(), total_codewords(v(1)));
    }

    #[test]
    fn test_terminator_skipped_when_full() {
        // 1-H holds 72 bits; 17 digits take 4 + 10 + 57 = 71, no room for 4 more
        let plan = block_plan(v(1), ECLevel::H);
        let digits = vec![Segment::new("12345678901234567", Mode::Numeric).unwrap()];
        let data = pad_data(v(1), ECLevel::H, &digits, plan).unwrap();
        assert_eq!(data.len(), 9);
        assert_eq!(data[8] & 1, 0);

        let eight = vec![Segment::new("abcdefgh", Mode::Byte).unwrap()];
        assert!(matches!(
            create_codewords(v(1), ECLevel::H, &eight),
            Err(QrError::CapacityExceeded {
                needed_bits: 76,
                capacity_bits: 72,
                ..
            })
        ));
    }

    #[test]
    fn test_interleave_order() {
        // 5-Q: blocks of 15, 15, 16, 16 data codewords
        let plan = block_plan(v(5), ECLevel::Q);
        let data: Vec<u8> = (0..plan.total_data_codewords as u8).collect();
        let out = interleave_blocks(&data, plan).unwrap();
        assert_eq!(out.len(), total_codewords(v(5)));
        // First column: first byte of each block
        assert_eq!(&out[..4], &[0, 15, 30, 46]);
        // The last data column only has the two long blocks
        assert_eq!(&out[60..62], &[45, 61]);
    }

    #[test]
    fn test_select_version() {
        let segments = vec![Segment::new("Hello world", Mode::Byte).unwrap()];
        assert_eq!(select_version(ECLevel::M, &segments).unwrap(), v(1));
        assert_eq!(select_version(ECLevel::H, &segments).unwrap(), v(2));
    }

    #[test]
    fn test_select_version_capacity_exceeded() {
        let text = "x".repeat(1300);
        let segments = vec![Segment::new(&text, Mode::Byte).unwrap()];
        assert!(matches!(
            select_version(ECLevel::H, &segments),
            Err(QrError::CapacityExceeded {
                level: ECLevel::H,
                ..
            })
        ));
        assert!(select_version(ECLevel::L, &segments).is_ok());
    }
}
