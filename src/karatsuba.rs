use crate::low_level::add_assign_digits_slice;
use crate::Natural;

/// Karatsuba multiplication: split both operands at half the limb count,
/// recurse on three subproducts instead of four, recombine at limb offsets
/// 0, half, and 2*half. The subproducts re-enter the size-dispatching `Mul`,
/// so small pieces fall back to the schoolbook multiply.
pub fn karatsuba_mul(l: &Natural, r: &Natural) -> Natural {
    if l.is_zero() || r.is_zero() {
        return Natural::ZERO;
    }
    let split_len = (std::cmp::max(l.digits.len(), r.digits.len()) + 1) / 2;
    let mut digits = vec![0; l.digits.len() + r.digits.len() + 1];
    let [l0, l1] = split_digits!(&l.digits, split_len, 2);
    let [r0, r1] = split_digits!(&r.digits, split_len, 2);
    let prod0 = &l0 * &r0;
    let prod2 = &l1 * &r1;
    // The cross term: (l0 + l1)(r0 + r1) - l1*r1 - l0*r0 = l0*r1 + l1*r0.
    // Both subtrahends are summands of the product, so this never underflows.
    let prod1 = &(l0 + l1) * &(r0 + r1) - &prod2 - &prod0;
    add_assign_digits_slice(&mut digits, &prod0.digits);
    add_assign_digits_slice(&mut digits[split_len..], &prod1.digits);
    add_assign_digits_slice(&mut digits[2 * split_len..], &prod2.digits);
    Natural::from_limbs(digits)
}
