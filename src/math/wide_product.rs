use alloy::primitives::Uint;

/// A double width value `high * 2**BITS + low` held in two words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WideProduct<const BITS: usize, const LIMBS: usize> {
    pub high: Uint<BITS, LIMBS>,
    pub low: Uint<BITS, LIMBS>,
}

impl<const BITS: usize, const LIMBS: usize> WideProduct<BITS, LIMBS> {
    /// True when the whole value fits in the low word.
    pub fn is_narrow(&self) -> bool {
        self.high.is_zero()
    }

    /// @notice Calculates (high * 2**BITS + low) mod modulus without forming the wide value
    /// @dev Returns zero when modulus == 0, like `Uint::mul_mod`
    /// @param modulus The modulus
    /// @return remainder The remainder of the wide value
    pub fn remainder(&self, modulus: Uint<BITS, LIMBS>) -> Uint<BITS, LIMBS> {
        if modulus.is_zero() {
            return Uint::ZERO;
        }
        // 2**BITS mod m == ((2**BITS - 1) mod m + 1) mod m
        let base = Uint::<BITS, LIMBS>::MAX
            .wrapping_rem(modulus)
            .add_mod(Uint::from(1u64), modulus);

        self.high
            .mul_mod(base, modulus)
            .add_mod(self.low.wrapping_rem(modulus), modulus)
    }
}

/// @notice Calculates the full 2*BITS-bit product of a and b
/// @dev Compute the product mod 2**BITS and mod 2**BITS - 1, then use the Chinese
///     Remainder Theorem to reconstruct the wide result. `mul_mod` never overflows,
///     it reduces a genuine double width product.
/// @param a The multiplicand
/// @param b The multiplier
/// @return product The pair [high low] such that a * b == high * 2**BITS + low
pub fn wide_mul<const BITS: usize, const LIMBS: usize>(
    a: Uint<BITS, LIMBS>,
    b: Uint<BITS, LIMBS>,
) -> WideProduct<BITS, LIMBS> {
    let mm = a.mul_mod(b, Uint::MAX);
    let low = a.wrapping_mul(b);
    // high <= 2**BITS - 2, so reducing mod 2**BITS - 1 reduces to a single borrow
    let high = mm.wrapping_sub(low).wrapping_sub(Uint::from(u64::from(mm < low)));

    WideProduct { high, low }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{Q128, U256_1};
    use alloy::primitives::{U256, U512, U64};

    fn split(wide: U512) -> WideProduct<256, 4> {
        let limbs = wide.as_limbs();
        WideProduct {
            high: U256::from_limbs([limbs[4], limbs[5], limbs[6], limbs[7]]),
            low: U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]),
        }
    }

    #[test]
    fn zero_operand() {
        let product = wide_mul(U256::ZERO, U256::MAX);
        assert!(product.is_narrow());
        assert_eq!(product.low, U256::ZERO);
    }

    #[test]
    fn max_times_max() {
        // (2**256 - 1)**2 == (2**256 - 2) * 2**256 + 1
        let product = wide_mul(U256::MAX, U256::MAX);
        assert_eq!(product.high, U256::MAX - U256_1);
        assert_eq!(product.low, U256_1);
    }

    #[test]
    fn q128_squared_carries_into_high_word() {
        let product = wide_mul(Q128, Q128);
        assert_eq!(product.high, U256_1);
        assert_eq!(product.low, U256::ZERO);
    }

    #[test]
    fn carry_into_high_word() {
        // 2**255 * 3 == 2**256 + 2**255
        let half = U256::from_limbs([0, 0, 0, 1 << 63]);
        let product = wide_mul(half, U256::from(3u64));
        assert_eq!(product.high, U256_1);
        assert_eq!(product.low, half);
    }

    #[test]
    fn borrow_from_mm() {
        // (2**256 - 1) * 3 == 2 * 2**256 + (2**256 - 3), and mm == 0 < low
        let product = wide_mul(U256::MAX, U256::from(3u64));
        assert_eq!(product.high, U256::from(2u64));
        assert_eq!(product.low, U256::MAX - U256::from(2u64));
    }

    #[test]
    fn matches_widening_mul() {
        let samples = [
            U256::ZERO,
            U256_1,
            Q128 - U256_1,
            Q128,
            U256::from_limbs([u64::MAX, 0, u64::MAX, 0]),
            U256::from_limbs([0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 7, 1 << 62]),
            U256::MAX - U256_1,
            U256::MAX,
        ];
        for a in samples {
            for b in samples {
                let wide: U512 = a.widening_mul(b);
                assert_eq!(wide_mul(a, b), split(wide), "{a} * {b}");
            }
        }
    }

    #[test]
    fn narrow_width() {
        let a = U64::from(u64::MAX);
        let b = U64::from(0x1_0000_0001u64);
        let expected = u64::MAX as u128 * 0x1_0000_0001u128;
        let product = wide_mul(a, b);
        assert_eq!(product.high, U64::from((expected >> 64) as u64));
        assert_eq!(product.low, U64::from(expected as u64));
    }

    #[test]
    fn remainder_matches_mul_mod() {
        let a = U256::from_limbs([3, 1, 4, 1]);
        let b = U256::MAX - U256::from(5u64);
        let product = wide_mul(a, b);
        for modulus in [
            U256_1,
            U256::from(7u64),
            Q128,
            Q128 + U256_1,
            U256::MAX - U256_1,
            U256::MAX,
        ] {
            assert_eq!(product.remainder(modulus), a.mul_mod(b, modulus));
        }
        assert_eq!(product.remainder(U256::ZERO), U256::ZERO);
    }
}
