//! Polynomials over GF(256), coefficients stored high-order first
use crate::encoder::gf256::Gf256;
use crate::error::{QrError, Result};
use std::sync::{Arc, Mutex, PoisonError};

/// Immutable GF(256) polynomial; every operation returns a new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Strip leading zero coefficients, then multiply by x^shift
    pub fn new(coefficients: &[u8], shift: usize) -> Self {
        let offset = coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coefficients.len());
        let mut stripped = Vec::with_capacity(coefficients.len() - offset + shift);
        stripped.extend_from_slice(&coefficients[offset..]);
        stripped.resize(stripped.len() + shift, 0);
        Self {
            coefficients: stripped,
        }
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// True for the zero polynomial
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficient at `index` (0 = highest order)
    pub fn get(&self, index: usize) -> u8 {
        self.coefficients[index]
    }

    /// Coefficients, highest order first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.is_empty() || other.is_empty() {
            return Polynomial::new(&[], 0);
        }
        let mut product = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] ^= Gf256::mul(a, b);
            }
        }
        Polynomial::new(&product, 0)
    }

    /// Remainder of long division by `divisor`
    pub fn modulo(&self, divisor: &Polynomial) -> Result<Polynomial> {
        if divisor.is_empty() {
            return Err(QrError::EmptyDivisor);
        }
        let divisor_lead = Gf256::log(divisor.get(0))?;

        let mut remainder = self.clone();
        while remainder.len() >= divisor.len() {
            let ratio = Gf256::log(remainder.get(0))? - divisor_lead;
            let mut next = remainder.coefficients;
            for (slot, &coefficient) in next.iter_mut().zip(divisor.coefficients.iter()) {
                if coefficient != 0 {
                    *slot ^= Gf256::exp(Gf256::log(coefficient)? + ratio);
                }
            }
            remainder = Polynomial::new(&next, 0);
        }
        Ok(remainder)
    }
}

static GENERATORS: Mutex<Vec<Arc<Polynomial>>> = Mutex::new(Vec::new());

/// Reed-Solomon generator polynomial (x - a^0)(x - a^1)...(x - a^(len-1))
///
/// Every generator ever built is kept; a request for a new length extends
/// the table from the longest one already present.
pub fn generator_polynomial(ec_len: usize) -> Arc<Polynomial> {
    let mut table = GENERATORS.lock().unwrap_or_else(PoisonError::into_inner);
    if table.is_empty() {
        table.push(Arc::new(Polynomial::new(&[1], 0)));
    }
    while table.len() <= ec_len {
        let degree = table.len() - 1;
        let factor = Polynomial::new(&[1, Gf256::exp(degree as i32)], 0);
        let next = table[degree].multiply(&factor);
        table.push(Arc::new(next));
    }
    Arc::clone(&table[ec_len])
}
