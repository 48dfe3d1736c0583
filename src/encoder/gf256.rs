//! GF(256) arithmetic for QR Reed-Solomon codes
//! Field generated by the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::error::{QrError, Result};

/// GF(256) field operations using log/exp tables
pub struct Gf256;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];

    let mut i = 0;
    while i < 8 {
        exp[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        exp[i] = exp[i - 4] ^ exp[i - 5] ^ exp[i - 6] ^ exp[i - 8];
        i += 1;
    }

    let mut j = 0;
    while j < 255 {
        log[exp[j] as usize] = j as u8;
        j += 1;
    }

    Tables { exp, log }
}

static TABLES: Tables = build_tables();

impl Gf256 {
    /// Antilog: alpha^n, with n reduced modulo 255 (negative exponents allowed)
    pub fn exp(n: i32) -> u8 {
        TABLES.exp[n.rem_euclid(255) as usize]
    }

    /// Discrete log of a non-zero element
    pub fn log(n: u8) -> Result<i32> {
        if n < 1 {
            return Err(QrError::LogOfZero);
        }
        Ok(TABLES.log[n as usize] as i32)
    }

    /// Field multiplication; zero absorbs
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as i32;
        let log_b = TABLES.log[b as usize] as i32;
        Self::exp(log_a + log_b)
    }
}
