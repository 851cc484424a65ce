use crate::Natural;
use num_bigint::BigUint;
use proptest::prelude::*;

pub fn any_natural(range: std::ops::Range<usize>) -> impl Strategy<Value = Natural> {
    proptest::collection::vec(any::<u64>(), range).prop_map(Natural::from_limbs)
}

/// Bridges into num-bigint, the reference arbitrary-precision arithmetic the
/// tests check against.
pub fn oracle(n: &Natural) -> BigUint {
    let mut bytes = Vec::with_capacity(n.digits.len() * 8);
    for limb in &n.digits {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}
