//! Reed-Solomon error correction for QR codes
//! Parity is the remainder of the message polynomial (shifted by the parity
//! length) divided by the generator polynomial.
use crate::encoder::polynomial::{Polynomial, generator_polynomial};
use crate::error::Result;
use std::sync::Arc;

/// Reed-Solomon encoder for a fixed number of EC codewords per block
pub struct ReedSolomonEncoder {
    num_ecc_codewords: usize,
    generator: Arc<Polynomial>,
}

impl ReedSolomonEncoder {
    /// Encoder producing `num_ecc_codewords` parity bytes per block
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            num_ecc_codewords,
            generator: generator_polynomial(num_ecc_codewords),
        }
    }

    /// Compute the EC codewords for one block of data codewords
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let message = Polynomial::new(data, self.generator.len() - 1);
        let remainder = message.modulo(&self.generator)?;

        // Right-align the remainder; missing high-order terms are zero
        let mut ecc = vec![0u8; self.num_ecc_codewords];
        let offset = self.num_ecc_codewords - remainder.len();
        ecc[offset..].copy_from_slice(remainder.coefficients());
        Ok(ecc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::gf256::Gf256;

    /// Evaluate codeword polynomial (high-order first) at alpha^i
    fn syndrome(codeword: &[u8], i: i32) -> u8 {
        codeword
            .iter()
            .fold(0u8, |acc, &c| Gf256::mul(acc, Gf256::exp(i)) ^ c)
    }

    #[test]
    fn test_hello_world_1m() {
        // "HELLO WORLD" alphanumeric, version 1-M
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let ecc = ReedSolomonEncoder::new(10).encode(&data).unwrap();
        assert_eq!(ecc, vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_hello_world_1q() {
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236];
        let ecc = ReedSolomonEncoder::new(13).encode(&data).unwrap();
        assert_eq!(
            ecc,
            vec![168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_codeword_has_zero_syndromes() {
        let data = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60];
        let encoder = ReedSolomonEncoder::new(10);
        let mut codeword = data.to_vec();
        codeword.extend(encoder.encode(&data).unwrap());
        for i in 0..10 {
            assert_eq!(syndrome(&codeword, i), 0, "syndrome {i}");
        }
    }

    #[test]
    fn test_all_zero_data() {
        let ecc = ReedSolomonEncoder::new(7).encode(&[0; 9]).unwrap();
        assert_eq!(ecc, vec![0; 7]);
    }

    #[test]
    fn test_leading_zero_data() {
        // Leading zeros do not change the polynomial value
        let encoder = ReedSolomonEncoder::new(8);
        assert_eq!(
            encoder.encode(&[0, 0, 1, 2, 3]).unwrap(),
            encoder.encode(&[1, 2, 3]).unwrap()
        );
    }
}
