use crate::low_level::{add_small_assign, div_rem_small, mul_small_assign};
use crate::Natural;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Largest power of ten that fits in a u64 limb.
const CHUNK_DIGITS: usize = 19;
const CHUNK_BASE: u64 = 10_000_000_000_000_000_000;

/// A string that does not denote a non-negative integer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseNaturalError {
    #[error("empty string")]
    Empty,
    #[error("negative values are not representable")]
    Negative,
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
}

/// Parses a decimal string. Leading zeros are accepted and insignificant; a
/// sign or any non-digit byte is rejected.
impl FromStr for Natural {
    type Err = ParseNaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNaturalError::Empty);
        }
        if s.starts_with('-') {
            return Err(ParseNaturalError::Negative);
        }
        let mut out = Natural::ZERO;
        for chunk in s.as_bytes().chunks(CHUNK_DIGITS) {
            let mut value: u64 = 0;
            for &byte in chunk {
                if !byte.is_ascii_digit() {
                    return Err(ParseNaturalError::InvalidDigit(byte as char));
                }
                value = value * 10 + (byte - b'0') as u64;
            }
            mul_small_assign(&mut out.digits, 10u64.pow(chunk.len() as u32));
            add_small_assign(&mut out.digits, value);
        }
        Ok(out.normalize())
    }
}

/// Canonical decimal rendering, via repeated short division by 10^19.
impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut scratch = self.digits.clone();
        let mut chunks = Vec::new();
        while !scratch.is_empty() {
            chunks.push(div_rem_small(&mut scratch, CHUNK_BASE));
        }
        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i == 0 {
                write!(f, "{}", chunk)?;
            } else {
                write!(f, "{:019}", chunk)?;
            }
        }
        Ok(())
    }
}
