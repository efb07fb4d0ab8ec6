use alloy::primitives::U256;

pub const U256_1: U256 = U256::from_limbs([1, 0, 0, 0]);
pub const U256_2: U256 = U256::from_limbs([2, 0, 0, 0]);
pub const U256_3: U256 = U256::from_limbs([3, 0, 0, 0]);

pub const FIXED_POINT96_RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);

pub const FIXED_POINT128_RESOLUTION: u8 = 128;
pub const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);

/// Number of low bits of `(3 * d) ^ 2` that already invert an odd `d`
pub const INVERSE_SEED_BITS: usize = 4;

/// @notice Number of Newton-Raphson steps needed to lift the inverse seed to a full word
/// @dev Depends only on the width, so every call at a given width runs the same number of steps
/// @param bits The width of the integer type
/// @return steps ceil(log2(bits / INVERSE_SEED_BITS))
pub const fn newton_iterations(bits: usize) -> usize {
    let mut correct = INVERSE_SEED_BITS;
    let mut steps = 0;
    while correct < bits {
        correct *= 2;
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_scales() {
        assert_eq!(Q96, U256_1 << FIXED_POINT96_RESOLUTION);
        assert_eq!(Q128, U256_1 << FIXED_POINT128_RESOLUTION);
    }

    #[test]
    fn newton_iterations_per_width() {
        assert_eq!(newton_iterations(64), 4);
        assert_eq!(newton_iterations(128), 5);
        assert_eq!(newton_iterations(256), 6);
        assert_eq!(newton_iterations(512), 7);
        // not a power of two: 4 -> 8 -> ... -> 256 still covers 192
        assert_eq!(newton_iterations(192), 6);
    }
}
