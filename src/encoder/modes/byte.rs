//! Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bit_buffer::BitBuffer;

/// Encode byte mode data (8 bits per byte, UTF-8 for text)
pub struct ByteEncoder;

impl ByteEncoder {
    /// One 8-bit group per byte
    pub fn write(bytes: &[u8], buffer: &mut BitBuffer) {
        for &byte in bytes {
            buffer.put(byte as u32, 8);
        }
    }
}
