/// Append-only, MSB-first bit buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `length` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, length: usize) {
        debug_assert!(length <= 32, "at most 32 bits per put");
        for i in (0..length).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn put_bit(&mut self, bit: bool) {
        let index = self.length / 8;
        if self.buffer.len() <= index {
            self.buffer.push(0);
        }
        if bit {
            self.buffer[index] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Bit at `index` (0 = first bit written); false past the end
    pub fn get(&self, index: usize) -> bool {
        if index >= self.length {
            return false;
        }
        (self.buffer[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.length
    }

    /// True before anything is written
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Copy of the packed bytes; trailing bits of the last byte are zero
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }
}
