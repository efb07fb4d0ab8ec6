use alloy::primitives::Uint;

use super::error::FullMathError;

/// Rounding direction for division operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Round towards zero (floor division).
    #[default]
    Down,
    /// Round away from zero (ceiling division).
    Up,
}

impl Rounding {
    /// @notice Applies the rounding direction to a floor quotient
    /// @dev Throws if rounding up would overflow BITS bits
    /// @param quotient The floor of the exact quotient
    /// @param remainder What the floor division left over
    /// @return result The rounded quotient
    pub fn apply<const BITS: usize, const LIMBS: usize>(
        self,
        quotient: Uint<BITS, LIMBS>,
        remainder: Uint<BITS, LIMBS>,
    ) -> Result<Uint<BITS, LIMBS>, FullMathError> {
        match self {
            Rounding::Down => Ok(quotient),
            Rounding::Up if remainder.is_zero() => Ok(quotient),
            Rounding::Up => quotient
                .checked_add(Uint::from(1u64))
                .ok_or(FullMathError::ResultOverflow),
        }
    }
}

/// @notice Returns ceil(x / y)
/// @dev Throws if y == 0. Never overflows since ceil(x / y) <= x for y >= 1
/// @param x The dividend
/// @param y The divisor
/// @return z The quotient, ceil(x / y)
pub fn div_rounding_up<const BITS: usize, const LIMBS: usize>(
    x: Uint<BITS, LIMBS>,
    y: Uint<BITS, LIMBS>,
) -> Result<Uint<BITS, LIMBS>, FullMathError> {
    if y.is_zero() {
        return Err(FullMathError::DivisionByZero);
    }
    Rounding::Up.apply(x.wrapping_div(y), x.wrapping_rem(y))
}
