use crate::low_level::{add_to_digits, add_u128_to_digits_with_carry};
use crate::Natural;

/// Quadratic long multiplication. Reference implementation and the base case
/// the Karatsuba recursion bottoms out in.
pub fn schoolbook_mul(l: &Natural, r: &Natural) -> Natural {
    let mut digits = vec![0; l.digits.len() + r.digits.len() + 1];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        let mut carry: bool = false;
        let mut digits_iter = digits[i..].iter_mut();
        let mut digit0 = digits_iter.next().unwrap();
        for (&r_digit, digit1) in r.digits.iter().zip(digits_iter) {
            let prod = (l_digit as u128) * (r_digit as u128) + ((carry as u128) << 64);
            carry = add_u128_to_digits_with_carry(prod, digit0, digit1);
            digit0 = digit1;
        }
        if carry {
            add_to_digits(1, &mut digits[i + r.digits.len()..]);
        }
    }
    Natural::from_limbs(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    fn mul_u64(x: u64, y: u64) -> (u64, u64) {
        let merged = (x as u128) * (y as u128);
        (merged as u64, (merged >> 64) as u64)
    }

    #[test]
    fn hardcoded() {
        let a = Natural::from(2);
        let b = Natural::from_limbs(vec![0x8000000000000000, 1]);
        let prod = schoolbook_mul(&a, &b);
        let c = Natural::from_limbs(vec![0, 3]);
        assert_eq!(prod, c);
    }
    proptest! {
        #[test]
        fn mul_small(a in any::<u64>(), b in any::<u64>()) {
            let prod = schoolbook_mul(&Natural::from(a), &Natural::from(b));
            let prod_pair = (
                prod.digits.get(0).copied().unwrap_or(0),
                prod.digits.get(1).copied().unwrap_or(0),
            );
            prop_assert_eq!(prod_pair, mul_u64(a, b));
        }
    }
    proptest! {
        #[test]
        fn mul_zero(a in any_natural(0..20)) {
            let prod = schoolbook_mul(&Natural::ZERO, &a);
            prop_assert_eq!(prod, Natural::ZERO);
        }
    }
    proptest! {
        #[test]
        fn mul_identity(a in any_natural(0..20)) {
            let prod = schoolbook_mul(&Natural::from(1), &a);
            prop_assert_eq!(prod, a);
        }
    }
    proptest! {
        #[test]
        fn distributive(a in any_natural(0..20), b in any_natural(0..20), c in any_natural(0..20)) {
            let sum_last = schoolbook_mul(&a, &c) + schoolbook_mul(&b, &c);
            let sum_first = schoolbook_mul(&(a.clone() + b), &c);
            prop_assert_eq!(sum_first, sum_last);
        }
    }
    proptest! {
        #[test]
        fn matches_oracle(a in any_natural(0..20), b in any_natural(0..20)) {
            let prod = schoolbook_mul(&a, &b);
            prop_assert_eq!(oracle(&prod), oracle(&a) * oracle(&b));
        }
    }
}
