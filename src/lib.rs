use std::cmp::Ordering;
use std::ops::Mul;

#[macro_use]
pub mod low_level;

pub mod decimal;
pub mod karatsuba;
pub mod schoolbook;

mod addsub;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::decimal::ParseNaturalError;
pub use crate::karatsuba::karatsuba_mul;
pub use crate::schoolbook::schoolbook_mul;

const KARATSUBA_THRESHOLD: usize = 60;

/// Arbitrary-precision non-negative integer: little-endian base-2^64 limbs,
/// normalized so the most significant limb is nonzero. Zero has no limbs.
#[derive(PartialEq, Eq, Clone)]
pub struct Natural {
    digits: Vec<u64>,
}

impl std::fmt::Debug for Natural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Natural")
            .field("digits", &format!("{:x?}", &self.digits))
            .finish()
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        let len_cmp = self.digits.len().cmp(&other.digits.len());
        if len_cmp != Ordering::Equal {
            return len_cmp;
        }
        for (s, o) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            let digit_cmp = s.cmp(o);
            if digit_cmp != Ordering::Equal {
                return digit_cmp;
            }
        }
        Ordering::Equal
    }
}

impl Natural {
    pub const ZERO: Natural = Natural { digits: Vec::new() };

    /// Builds a `Natural` from little-endian base-2^64 limbs, stripping
    /// trailing zero limbs.
    pub fn from_limbs(digits: Vec<u64>) -> Self {
        Natural { digits }.normalize()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns `self - other`, or `None` when `other > self`.
    pub fn checked_sub(&self, other: &Natural) -> Option<Natural> {
        if self < other {
            return None;
        }
        let mut out = self.clone();
        out -= other;
        Some(out)
    }

    fn normalize_in_place(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }
    fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }
}

impl From<u64> for Natural {
    fn from(x: u64) -> Self {
        Natural { digits: vec![x] }.normalize()
    }
}

/// Exact product of two naturals. Small operands go through the schoolbook
/// multiply; past `KARATSUBA_THRESHOLD` limbs the Karatsuba split wins and the
/// recursion re-enters here for its subproducts.
pub fn multiply(x: &Natural, y: &Natural) -> Natural {
    x * y
}

impl<'a, 'b> Mul<&'b Natural> for &'a Natural {
    type Output = Natural;

    fn mul(self, other: &'b Natural) -> Natural {
        let min_len = std::cmp::min(self.digits.len(), other.digits.len());
        if min_len > KARATSUBA_THRESHOLD {
            karatsuba_mul(self, other)
        } else {
            schoolbook_mul(self, other)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn multiply_known_products() {
        let cases = [
            ("123", "123", "15129"),
            ("0", "999", "0"),
            ("9", "9", "81"),
            ("1234", "5678", "7006652"),
            ("99999999", "99999999", "9999999800000001"),
        ];
        for &(x, y, want) in cases.iter() {
            let x: Natural = x.parse().unwrap();
            let y: Natural = y.parse().unwrap();
            assert_eq!(multiply(&x, &y).to_string(), want);
        }
    }

    proptest! {
        #[test]
        fn multiply_matches_oracle(a in "[1-9][0-9]{0,140}", b in "[0-9]{1,140}") {
            let x: Natural = a.parse().unwrap();
            let y: Natural = b.parse().unwrap();
            let expected = oracle(&x) * oracle(&y);
            prop_assert_eq!(oracle(&multiply(&x, &y)), expected);
        }
    }
    proptest! {
        // Wide enough to take the Karatsuba path through the dispatcher.
        #[test]
        fn multiply_matches_oracle_wide(
            a in any_natural(KARATSUBA_THRESHOLD..KARATSUBA_THRESHOLD + 40),
            b in any_natural(KARATSUBA_THRESHOLD..KARATSUBA_THRESHOLD + 40),
        ) {
            let expected = oracle(&a) * oracle(&b);
            prop_assert_eq!(oracle(&multiply(&a, &b)), expected);
        }
    }
    proptest! {
        #[test]
        fn multiply_commutes(a in any_natural(0..30), b in any_natural(0..30)) {
            prop_assert_eq!(multiply(&a, &b), multiply(&b, &a));
        }
    }
    proptest! {
        #[test]
        fn multiply_annihilator_and_identity(a in any_natural(0..30)) {
            prop_assert_eq!(multiply(&a, &Natural::ZERO), Natural::ZERO);
            prop_assert_eq!(multiply(&Natural::ZERO, &a), Natural::ZERO);
            prop_assert_eq!(multiply(&a, &Natural::from(1)), a.clone());
        }
    }
    proptest! {
        #[test]
        fn multiply_dispatches_past_threshold(
            a in any_natural(KARATSUBA_THRESHOLD + 1..KARATSUBA_THRESHOLD + 10),
            b in any_natural(KARATSUBA_THRESHOLD + 1..KARATSUBA_THRESHOLD + 10),
        ) {
            prop_assert_eq!(multiply(&a, &b), schoolbook_mul(&a, &b));
        }
    }
    proptest! {
        #[test]
        fn product_digit_length_bounds(a in "[1-9][0-9]{0,60}", b in "[1-9][0-9]{0,60}") {
            let x: Natural = a.parse().unwrap();
            let y: Natural = b.parse().unwrap();
            let digits = multiply(&x, &y).to_string().len();
            prop_assert!(digits <= a.len() + b.len());
            prop_assert!(digits >= std::cmp::max(a.len(), b.len()));
        }
    }
}
