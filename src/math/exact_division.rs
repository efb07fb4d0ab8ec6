use alloy::primitives::Uint;

use super::{constants::newton_iterations, error::FullMathError, wide_product::WideProduct};

/// @notice Calculates floor([high low] / denominator) for a wide numerator
/// @dev Throws if denominator == 0 or if the quotient does not fit in BITS bits
/// @param product The wide numerator
/// @param denominator The divisor
/// @return quotient The BITS-bit quotient
pub fn div_wide<const BITS: usize, const LIMBS: usize>(
    product: WideProduct<BITS, LIMBS>,
    denominator: Uint<BITS, LIMBS>,
) -> Result<Uint<BITS, LIMBS>, FullMathError> {
    divide(product, product.remainder(denominator), denominator)
}

/// Same as [`div_wide`] with the remainder of the numerator modulo `denominator`
/// already known, as `mul_mod(a, b, denominator)` is when the numerator is `a * b`.
pub(crate) fn divide<const BITS: usize, const LIMBS: usize>(
    product: WideProduct<BITS, LIMBS>,
    remainder: Uint<BITS, LIMBS>,
    mut denominator: Uint<BITS, LIMBS>,
) -> Result<Uint<BITS, LIMBS>, FullMathError> {
    if denominator.is_zero() {
        return Err(FullMathError::DivisionByZero);
    }

    let WideProduct { mut high, mut low } = product;

    // Handle non-overflow cases, single word division
    if high.is_zero() {
        return Ok(low.wrapping_div(denominator));
    }

    // The quotient fits in BITS bits iff high < denominator. high == denominator
    // would be exactly 2**BITS and is rejected as well.
    if denominator <= high {
        return Err(FullMathError::ResultOverflow);
    }

    // Make division exact by subtracting the remainder from [high low].
    // The borrow is decided against low before it is updated.
    high = high.wrapping_sub(Uint::from(u64::from(remainder > low)));
    low = low.wrapping_sub(remainder);

    // Factor powers of two out of denominator and shift them out of [high low].
    // wrapping_shl by BITS yields zero, which covers an already odd denominator.
    let shift = denominator.trailing_zeros();
    denominator = denominator.wrapping_shr(shift);
    low = low.wrapping_shr(shift) | high.wrapping_shl(BITS - shift);

    // Because the division is now exact we can divide by multiplying with the
    // modular inverse of denominator. This is correct modulo 2**BITS, and the fit
    // check guarantees the quotient is below 2**BITS, so it is the final result.
    Ok(low.wrapping_mul(newton_inverse(denominator)))
}

/// @notice Calculates the inverse of an odd number modulo 2**BITS
/// @param denominator The number to invert
/// @return inv The value such that denominator * inv == 1 mod 2**BITS, or None if denominator is even
pub fn inv_mod_pow2<const BITS: usize, const LIMBS: usize>(
    denominator: Uint<BITS, LIMBS>,
) -> Option<Uint<BITS, LIMBS>> {
    denominator.bit(0).then(|| newton_inverse(denominator))
}

fn newton_inverse<const BITS: usize, const LIMBS: usize>(
    denominator: Uint<BITS, LIMBS>,
) -> Uint<BITS, LIMBS> {
    let two = Uint::<BITS, LIMBS>::from(2u64);
    let three = Uint::<BITS, LIMBS>::from(3u64);

    // Seed correct for four bits: denominator * inv == 1 mod 2**4
    let mut inv = three.wrapping_mul(denominator) ^ two;

    // Newton-Raphson iteration. Thanks to Hensel's lifting lemma this also works
    // in modular arithmetic, doubling the correct bits in each step. The step
    // count depends on the width only.
    for _ in 0..newton_iterations(BITS) {
        inv = inv.wrapping_mul(two.wrapping_sub(denominator.wrapping_mul(inv)));
    }

    inv
}
